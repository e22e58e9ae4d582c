//! Numeral Parser
//!
//! Symbol alphabet and tokenization of Roman numeral text.

pub mod lexer;
pub mod symbol;

pub use lexer::{fold_case, tokenize};
pub use symbol::Symbol;
