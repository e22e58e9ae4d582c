//! Validation Engine
//!
//! Numeral grammar checks and batch conversion with diagnostics.

pub mod engine;
pub mod grammar;

pub use engine::{
    Conversion, ConversionReport, Diagnostic, Direction, Options, Severity, convert_document,
    convert_line,
};
pub use grammar::{is_canonical_numeral, is_valid_roman};
