//! Validator behaviour for typed input
use roman_numerals::{is_canonical_numeral, is_valid_roman};

#[test]
fn test_blank_input_is_permitted() {
    assert!(is_valid_roman(""));
    assert!(is_valid_roman("   "));
}

#[test]
fn test_strict_check_rejects_blank_input() {
    assert!(!is_canonical_numeral(""));
    assert!(!is_canonical_numeral("   "));
    assert!(is_canonical_numeral("MCMXCIV"));
}

#[test]
fn test_canonical_and_non_canonical() {
    assert!(is_valid_roman("MCMXCIV"));
    assert!(is_valid_roman("mmxxiv"));
    assert!(!is_valid_roman("IIII"));
    assert!(!is_valid_roman("ABC"));
    assert!(!is_valid_roman("MMMM"));
}

#[test]
fn test_every_digit_form_is_accepted() {
    let hundreds = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
    let tens = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];

    for h in hundreds {
        for t in tens {
            let text = format!("MM{h}{t}V");
            assert!(is_canonical_numeral(&text), "{text} should be valid");
        }
    }
}

#[test]
fn test_partial_matches_are_rejected() {
    assert!(!is_valid_roman("XIVX"));
    assert!(!is_valid_roman("MCMXCIV!"));
    assert!(!is_valid_roman("X IV"));
}
