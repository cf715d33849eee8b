//! ISO 7064 MOD 97-10 check-digit arithmetic for IBANs.
//!
//! An IBAN is checked by moving its first four characters (country code and
//! check digits) to the end, expanding every letter to a two-digit number
//! (`A` = 10 ... `Z` = 35), and reading the result as one decimal integer.
//! A valid IBAN leaves remainder 1 modulo 97.
//!
//! The expanded integer routinely exceeds 60 digits. Instead of building it,
//! the remainder is folded in one character at a time:
//! `remainder = (remainder * base + value) % 97`, where `base` is 10 for a
//! digit and 100 for a letter. No heap allocation takes place.
//!
//! # References
//!
//! - ISO 13616-1:2020, Annex B
//! - ISO/IEC 7064:2003, MOD 97-10

use crate::country::Country;

/// Number of leading characters moved to the end before the check.
const ROTATION: usize = 4;

/// Feeds one character into a running MOD 97 remainder.
///
/// Returns `None` for any character outside `A-Z` and `0-9`.
fn fold(remainder: u32, c: char) -> Option<u32> {
    match c {
        '0'..='9' => {
            let digit = c as u32 - '0' as u32;
            Some((remainder * 10 + digit) % 97)
        }
        'A'..='Z' => {
            let value = c as u32 - 'A' as u32 + 10;
            Some((remainder * 100 + value) % 97)
        }
        _ => None,
    }
}

/// Folds every character of `s` into `remainder`.
fn fold_str(remainder: u32, s: &str) -> Option<u32> {
    s.chars().try_fold(remainder, fold)
}

/// Computes the MOD 97-10 remainder of a cleaned IBAN.
///
/// **Pre-condition:** `cleaned` is upper-case with whitespace removed.
///
/// Returns `None` when the remainder cannot be computed:
/// - `cleaned` has fewer than four characters, so there is nothing to rotate;
/// - `cleaned` contains a character outside `A-Z` and `0-9`.
///
/// Character admissibility is checked here regardless of what ran before.
/// A valid IBAN yields `Some(1)`.
///
/// # Examples
///
/// ```
/// use iban_core::check_digits::checksum_remainder;
///
/// assert_eq!(checksum_remainder("FR2730003000309332627391239"), Some(1));
/// assert_eq!(checksum_remainder("FR2830003000309332627391239"), Some(2));
/// assert_eq!(checksum_remainder("FR2"), None);
/// assert_eq!(checksum_remainder("FR27-3000"), None);
/// ```
pub fn checksum_remainder(cleaned: &str) -> Option<u32> {
    let split = cleaned
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(cleaned.len()))
        .nth(ROTATION)?;
    let (head, tail) = cleaned.split_at(split);
    fold_str(fold_str(0, tail)?, head)
}

/// Returns `true` if `cleaned` passes the MOD 97-10 check.
pub fn mod97_10(cleaned: &str) -> bool {
    checksum_remainder(cleaned) == Some(1)
}

/// Computes the two check digits for `bban` in `country`.
///
/// The result, placed between the country code and the BBAN, produces an
/// IBAN whose remainder is 1. Returns `None` if `bban` contains a character
/// outside `A-Z` and `0-9`. The BBAN length is not checked.
///
/// # Examples
///
/// ```
/// use iban_core::Country;
/// use iban_core::check_digits::compute_check_digits;
///
/// let digits = compute_check_digits(Country::France, "30003000309332627391239");
/// assert_eq!(digits.as_deref(), Some("27"));
/// ```
pub fn compute_check_digits(country: Country, bban: &str) -> Option<String> {
    let remainder = fold_str(fold_str(fold_str(0, bban)?, country.code())?, "00")?;
    Some(format!("{:02}", 98 - remainder))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    /// Reference computation that builds the full expanded integer as text
    /// and reduces it in nine-digit chunks.
    fn reference_remainder(cleaned: &str) -> u64 {
        let rotated = format!("{}{}", &cleaned[4..], &cleaned[..4]);
        let digits: String = rotated
            .chars()
            .map(|c| c.to_digit(36).expect("alphanumeric").to_string())
            .collect();
        let mut remainder = 0u64;
        for chunk in digits.as_bytes().chunks(9) {
            let text = format!("{remainder}{}", std::str::from_utf8(chunk).expect("ascii"));
            remainder = text.parse::<u64>().expect("fits in u64") % 97;
        }
        remainder
    }

    #[test]
    fn valid_french_iban() {
        assert_eq!(checksum_remainder("FR2730003000309332627391239"), Some(1));
        assert!(mod97_10("FR2730003000309332627391239"));
    }

    #[test]
    fn altered_check_digit_detected() {
        assert_eq!(checksum_remainder("FR2830003000309332627391239"), Some(2));
        assert!(!mod97_10("FR2830003000309332627391239"));
    }

    #[test]
    fn valid_ibans_with_letters_in_bban() {
        for iban in [
            "GB82WEST12345698765432",
            "NL91ABNA0417164300",
            "MT84MALT011000012345MTLCAST001S",
            "SC18SSCB11010000000000001497USD",
            "FR1420041010050500013M02606",
            "LC55HEMM000100010012001200023015",
        ] {
            assert_eq!(checksum_remainder(iban), Some(1), "{iban}");
        }
    }

    #[test]
    fn shortest_and_longest_registry_ibans() {
        assert!(mod97_10("NO9386011117947"));
        assert!(mod97_10("RU0304452522540817810538091310419"));
    }

    #[test]
    fn matches_chunked_reference() {
        for iban in [
            "DE44500105175407324931",
            "FR2830003000309332627391239",
            "KW81CBKU0000000000001234560101",
            "ZZ1730003000309332627391239",
            "AAAA",
            "ZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ",
        ] {
            let expected = u32::try_from(reference_remainder(iban)).expect("below 97");
            assert_eq!(checksum_remainder(iban), Some(expected), "{iban}");
        }
    }

    #[test]
    fn unknown_country_does_not_matter_to_checksum() {
        assert_eq!(checksum_remainder("ZZ1730003000309332627391239"), Some(1));
    }

    #[test]
    fn fewer_than_four_characters_has_no_result() {
        assert_eq!(checksum_remainder(""), None);
        assert_eq!(checksum_remainder("F"), None);
        assert_eq!(checksum_remainder("FR2"), None);
        assert!(!mod97_10(""));
    }

    #[test]
    fn exactly_four_characters_is_computable() {
        // Rotation of a four-character string is the identity.
        assert_eq!(checksum_remainder("0001"), Some(1));
    }

    #[test]
    fn forbidden_characters_have_no_result() {
        assert_eq!(checksum_remainder("FR283000300030933262739123🐷"), None);
        assert_eq!(checksum_remainder("FR27 3000"), None);
        assert_eq!(checksum_remainder("fr2730003000309332627391239"), None);
    }

    #[test]
    fn multibyte_character_in_prefix_does_not_panic() {
        assert_eq!(checksum_remainder("🐷🐷🐷🐷1234"), None);
        assert_eq!(checksum_remainder("F🐷27"), None);
    }

    #[test]
    fn compute_check_digits_known_values() {
        assert_eq!(
            compute_check_digits(Country::Germany, "500105175407324931").as_deref(),
            Some("44")
        );
        assert_eq!(
            compute_check_digits(Country::UnitedKingdom, "WEST12345698765432").as_deref(),
            Some("82")
        );
        assert_eq!(
            compute_check_digits(Country::Norway, "86011117947").as_deref(),
            Some("93")
        );
    }

    #[test]
    fn compute_check_digits_pads_to_two() {
        let digits = compute_check_digits(Country::Russia, "04452522540817810538091310419")
            .expect("alphanumeric bban");
        assert_eq!(digits, "03");
    }

    #[test]
    fn computed_digits_always_validate() {
        for &country in Country::ALL {
            let bban = "1".repeat(country.bban_length());
            let digits = compute_check_digits(country, &bban).expect("digits");
            let iban = format!("{}{digits}{bban}", country.code());
            assert!(mod97_10(&iban), "{iban}");
        }
    }

    #[test]
    fn compute_check_digits_rejects_forbidden() {
        assert_eq!(compute_check_digits(Country::France, "3000-3000"), None);
    }
}
