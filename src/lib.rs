//! Roman Numerals
//!
//! Pure, stateless conversion between Roman numerals and integers.
//!
//! This library provides:
//! - Syntactic validation of Roman numerals
//! - Roman to integer and integer to Roman conversion (0..=3999)
//! - Line-oriented batch conversion with diagnostics
//! - Configuration management for the `roman` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod numeral;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::NumeralError;
pub use numeral::{MAX_VALUE, MIN_VALUE, Numeral, integer_to_roman, parse_integer, roman_to_integer};
pub use validation::{convert_document, is_canonical_numeral, is_valid_roman};
