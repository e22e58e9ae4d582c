//! Round-trip properties between the two conversion directions
use proptest::prelude::*;
use roman_numerals::{integer_to_roman, is_canonical_numeral, roman_to_integer};

proptest! {
    #[test]
    fn test_integer_roundtrip(n in 1i32..=3999) {
        let roman = integer_to_roman(n).unwrap();
        prop_assert!(is_canonical_numeral(&roman));
        prop_assert_eq!(roman_to_integer(&roman).unwrap(), n);
    }

    #[test]
    fn test_lowercase_numeral_roundtrip(n in 1i32..=3999) {
        let roman = integer_to_roman(n).unwrap();
        let value = roman_to_integer(&roman.to_lowercase()).unwrap();
        prop_assert_eq!(integer_to_roman(value).unwrap(), roman);
    }

    #[test]
    fn test_out_of_range_rejected(n in prop_oneof![i32::MIN..0, 4000i32..=i32::MAX]) {
        prop_assert!(integer_to_roman(n).is_err());
    }

    #[test]
    fn test_conversion_never_panics(text in "[IVXLCDMivxlcdm ]{0,12}") {
        let _ = roman_to_integer(&text);
    }
}

#[test]
fn test_every_canonical_numeral_has_one_value() {
    let mut seen = std::collections::HashSet::new();
    for n in 1..=3999 {
        let roman = integer_to_roman(n).unwrap();
        assert!(seen.insert(roman), "duplicate numeral for {n}");
    }
}
