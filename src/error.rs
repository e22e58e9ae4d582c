//! Error types for numeral conversion.

use thiserror::Error;

use crate::numeral::{MAX_VALUE, MIN_VALUE};

/// Errors returned by validation and conversion.
///
/// Every variant is recoverable: callers re-prompt, clear input or report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("invalid Roman numeral: '{input}'")]
    InvalidNumeral { input: String },

    #[error("{value} is outside the supported range {}..={}", MIN_VALUE, MAX_VALUE)]
    OutOfRange { value: i32 },

    #[error("not an integer: '{input}'")]
    ParseFailure { input: String },
}

impl NumeralError {
    pub(crate) fn invalid(input: &str) -> Self {
        NumeralError::InvalidNumeral {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumeralError>;
