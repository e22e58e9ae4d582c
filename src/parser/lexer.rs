//! Numeral Lexer
//!
//! Fast, simple tokenization of Roman numeral text.
//! Focus: map characters onto symbols with no locale state.

use crate::error::{NumeralError, Result};
use crate::parser::symbol::Symbol;

/// Tokenize numeral text into symbols
///
/// Lowercase letters are folded; the first character outside the
/// alphabet (whitespace included) makes the whole text invalid.
pub fn tokenize(text: &str) -> Result<Vec<Symbol>> {
    text.chars()
        .map(|c| Symbol::from_char(c).ok_or_else(|| NumeralError::invalid(text)))
        .collect()
}

/// Uppercase the seven numeral letters, leaving every other character as-is
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| match Symbol::from_char(c) {
            Some(symbol) => symbol.as_char(),
            None => c,
        })
        .collect()
}
