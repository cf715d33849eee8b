//! Property-based tests over the whole validation and formatting surface.
#![allow(clippy::expect_used)]

use iban_core::{
    Country, Iban, Violation, clean, compute_check_digits, country_code, format, is_allowed,
    validate,
};
use proptest::prelude::*;

const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Mixed-case alphanumerics plus whitespace, punctuation, and non-ASCII.
const RAW_INPUT: &str = "[a-zA-Z0-9 \t\\-/.🐷ÄéΩ٣]{0,40}";

fn any_country() -> impl Strategy<Value = Country> {
    prop::sample::select(Country::ALL.to_vec())
}

/// A registry country plus a random alphanumeric BBAN of the right length.
fn country_and_bban() -> impl Strategy<Value = (Country, String)> {
    any_country().prop_flat_map(|country| {
        let bban = prop::collection::vec(0..ALPHANUM.len(), country.bban_length())
            .prop_map(|idx| idx.into_iter().map(|i| char::from(ALPHANUM[i])).collect());
        (Just(country), bban)
    })
}

fn build_iban(country: Country, bban: &str) -> String {
    let digits = compute_check_digits(country, bban).expect("alphanumeric bban");
    format!("{}{digits}{bban}", country.code())
}

proptest! {
    #[test]
    fn cleaning_before_validation_changes_nothing(raw in RAW_INPUT) {
        prop_assert_eq!(validate(&clean(&raw)), validate(&raw));
    }

    #[test]
    fn cleaning_is_idempotent(raw in RAW_INPUT) {
        let once = clean(&raw);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn generated_ibans_are_valid((country, bban) in country_and_bban()) {
        let iban = build_iban(country, &bban);
        prop_assert_eq!(validate(&iban), Vec::<Violation>::new());
        prop_assert_eq!(country_code(&iban), Some(country));
    }

    #[test]
    fn formatting_round_trips((country, bban) in country_and_bban()) {
        let iban = build_iban(country, &bban);
        let formatted = format(&iban).expect("registry country");
        let stripped: String = formatted.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(stripped, iban.clone());
        prop_assert!(!formatted.contains("  "));
        prop_assert!(!formatted.ends_with(' '));
        prop_assert_eq!(validate(&formatted), Vec::<Violation>::new());
    }

    #[test]
    fn newtype_accepts_generated_ibans((country, bban) in country_and_bban()) {
        let raw = build_iban(country, &bban);
        let iban = Iban::try_from(raw.as_str()).expect("valid");
        prop_assert_eq!(iban.electronic(), raw.as_str());
        prop_assert_eq!(iban.bban(), bban.as_str());
        prop_assert_eq!(iban.country(), country);
    }

    #[test]
    fn single_digit_substitution_is_detected(
        (country, bban) in country_and_bban(),
        position in any::<prop::sample::Index>(),
        delta in 1u32..10,
    ) {
        let iban = build_iban(country, &bban);
        let digit_positions: Vec<usize> = iban
            .char_indices()
            .skip(4)
            .filter(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!digit_positions.is_empty());
        let at = digit_positions[position.index(digit_positions.len())];
        let old = iban.as_bytes()[at] - b'0';
        let new = (u32::from(old) + delta) % 10;
        let mut corrupted = iban.clone();
        corrupted.replace_range(at..=at, &new.to_string());
        prop_assert_eq!(validate(&corrupted), vec![Violation::InvalidChecksum]);
    }

    #[test]
    fn forbidden_payload_lists_exactly_the_forbidden_characters(raw in RAW_INPUT) {
        let cleaned = clean(&raw);
        let expected: String = cleaned.chars().filter(|c| !is_allowed(*c)).collect();
        let reported = validate(&raw).into_iter().find_map(|v| match v {
            Violation::ContainsForbiddenCharacters { saw } => Some(saw),
            Violation::InvalidChecksum
            | Violation::UnknownCountryCode { .. }
            | Violation::ExceedsMaximumLength { .. }
            | Violation::ExceedsCountryLengthSpecification { .. } => None,
        });
        if expected.is_empty() {
            prop_assert_eq!(reported, None);
        } else {
            prop_assert_eq!(reported, Some(expected));
        }
    }

    #[test]
    fn unregistered_prefix_is_reported(prefix in "[A-Z]{2}", rest in "[0-9]{0,30}") {
        prop_assume!(Country::from_code(&prefix).is_none());
        let violations = validate(&format!("{prefix}{rest}"));
        prop_assert!(
            violations.contains(&Violation::UnknownCountryCode { was: prefix.clone() }),
            "{:?}", violations
        );
    }

    #[test]
    fn wrong_length_for_country_is_reported(
        country in any_country(),
        len in 4usize..40,
    ) {
        prop_assume!(len != country.iban_length());
        let iban = format!("{}{}", country.code(), "0".repeat(len - 2));
        let violations = validate(&iban);
        prop_assert!(
            violations.contains(&Violation::ExceedsCountryLengthSpecification {
                expected: country.iban_length(),
                got: len,
            }),
            "{:?}", violations
        );
        prop_assert_eq!(
            violations.contains(&Violation::ExceedsMaximumLength { was: len }),
            len > 34
        );
    }

    #[test]
    fn nothing_is_valid_below_fifteen_characters(raw in "[A-Z0-9]{0,14}") {
        prop_assert!(!validate(&raw).is_empty());
    }
}

#[test]
fn every_country_formats_and_validates() {
    for &country in Country::ALL {
        let bban = "0".repeat(country.bban_length());
        let iban = build_iban(country, &bban);
        assert!(validate(&iban).is_empty(), "{iban}");
        let formatted = format(&iban).expect("registry country");
        assert_eq!(formatted.replace(' ', ""), iban);
    }
}
