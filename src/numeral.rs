//! Conversion between Roman numerals and integers.
//!
//! Both directions are pure functions over their arguments:
//! - [`roman_to_integer`] scans symbols left to right with one-symbol lookahead.
//! - [`integer_to_roman`] maps each decimal digit through a fragment table.
//!
//! [`Numeral`] wraps an in-range value for callers that prefer a typed API.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::error::{NumeralError, Result};
use crate::parser::tokenize;
use crate::validation::grammar::is_canonical_numeral;

/// Smallest convertible value; it has no symbol and renders as `""`
pub const MIN_VALUE: i32 = 0;

/// Largest value expressible with at most three `M`
pub const MAX_VALUE: i32 = 3999;

const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Convert a Roman numeral to its integer value
///
/// Input is case-insensitive. Text that does not match the canonical
/// grammar, including empty text, fails with `InvalidNumeral` instead of
/// summing whatever symbols it contains.
pub fn roman_to_integer(text: &str) -> Result<i32> {
    if !is_canonical_numeral(text) {
        return Err(NumeralError::invalid(text));
    }

    let symbols = tokenize(text)?;
    let mut sum = 0;

    for (idx, symbol) in symbols.iter().enumerate() {
        let subtracts = symbol.can_subtract()
            && symbols
                .get(idx + 1)
                .is_some_and(|&next| symbol.forms_subtractive_pair(next));

        if subtracts {
            sum -= symbol.value();
        } else {
            sum += symbol.value();
        }
    }

    Ok(sum)
}

/// Convert an integer in `0..=3999` to its canonical Roman numeral
///
/// Zero yields the empty string.
pub fn integer_to_roman(n: i32) -> Result<String> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&n) {
        return Err(NumeralError::OutOfRange { value: n });
    }

    // Range check above keeps every index inside its table
    let n = n as usize;
    let mut roman = String::with_capacity(15);
    roman.push_str(THOUSANDS[n / 1000]);
    roman.push_str(HUNDREDS[n % 1000 / 100]);
    roman.push_str(TENS[n % 100 / 10]);
    roman.push_str(ONES[n % 10]);

    Ok(roman)
}

/// Parse decimal text into an integer, the way an input field is read
pub fn parse_integer(text: &str) -> Result<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| NumeralError::ParseFailure {
            input: text.to_string(),
        })
}

/// A value in `0..=3999` together with its canonical Roman form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(i32);

impl Numeral {
    pub fn value(self) -> i32 {
        self.0
    }

    /// Canonical Roman form; empty for zero
    pub fn to_roman(self) -> String {
        // Construction guarantees the range
        integer_to_roman(self.0).unwrap_or_default()
    }
}

impl TryFrom<i32> for Numeral {
    type Error = NumeralError;

    fn try_from(value: i32) -> Result<Self> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Numeral(value))
        } else {
            Err(NumeralError::OutOfRange { value })
        }
    }
}

impl From<Numeral> for i32 {
    fn from(numeral: Numeral) -> Self {
        numeral.0
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self> {
        roman_to_integer(s).map(Numeral)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_roman())
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Numeral", 2)?;
        state.serialize_field("value", &self.0)?;
        state.serialize_field("roman", &self.to_roman())?;
        state.end()
    }
}
