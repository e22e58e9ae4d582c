//! Numeral Grammar
//!
//! Syntactic validation of Roman numerals against the canonical pattern:
//! thousands as up to three `M`, then the hundreds, tens and ones digits
//! each in their additive or subtractive form.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::fold_case;

/// Canonical numeral grammar, matched against case-folded text
pub const NUMERAL_PATTERN: &str = r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

static NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERAL_PATTERN).expect("numeral grammar is a valid regex"));

/// Check whether text is an acceptable Roman numeral entry
///
/// Empty or blank text counts as valid: it is the "nothing typed yet"
/// state of an input field, not a numeral. Use [`is_canonical_numeral`]
/// when empty input must be rejected.
pub fn is_valid_roman(text: &str) -> bool {
    text.trim().is_empty() || is_canonical_numeral(text)
}

/// Strict check: non-empty, and the whole text matches the grammar
pub fn is_canonical_numeral(text: &str) -> bool {
    !text.is_empty() && NUMERAL_RE.is_match(&fold_case(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(Regex::new(NUMERAL_PATTERN).is_ok());
    }

    #[test]
    fn test_blank_is_valid() {
        assert!(is_valid_roman(""));
        assert!(is_valid_roman("   "));
        assert!(is_valid_roman("\t"));
    }

    #[test]
    fn test_blank_is_not_canonical() {
        assert!(!is_canonical_numeral(""));
        assert!(!is_canonical_numeral("   "));
    }

    #[test]
    fn test_canonical_numerals() {
        for text in ["I", "IV", "IX", "XL", "XC", "CD", "CM", "MCMXCIV", "MMMCMXCIX"] {
            assert!(is_valid_roman(text), "{text} should be valid");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_valid_roman("mcmxciv"));
        assert!(is_valid_roman("McMxCiV"));
    }

    #[test]
    fn test_rejects_non_canonical_repetition() {
        assert!(!is_valid_roman("IIII"));
        assert!(!is_valid_roman("VV"));
        assert!(!is_valid_roman("MMMM"));
        assert!(!is_valid_roman("XXXX"));
    }

    #[test]
    fn test_rejects_bad_subtraction() {
        assert!(!is_valid_roman("IC"));
        assert!(!is_valid_roman("IL"));
        assert!(!is_valid_roman("VX"));
        assert!(!is_valid_roman("XM"));
        assert!(!is_valid_roman("IIV"));
    }

    #[test]
    fn test_anchors_full_text() {
        assert!(!is_valid_roman("ABC"));
        assert!(!is_valid_roman("XIV1"));
        assert!(!is_valid_roman(" XIV"));
        assert!(!is_valid_roman("XIV\n"));
    }

    #[test]
    fn test_locale_letters_rejected() {
        assert!(!is_valid_roman("ıv"));
        assert!(!is_valid_roman("Ⅳ"));
    }
}
