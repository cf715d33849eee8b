//! IBAN generators with valid check digits.

use iban_core::{Country, compute_check_digits, format};
use rand::Rng;
use rand::rngs::StdRng;

const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const DIGITS: &[u8] = b"0123456789";

/// Generates a random BBAN of the registry length for `country`.
///
/// Roughly three in four characters are digits, as in real account numbers.
pub fn gen_bban(rng: &mut StdRng, country: Country) -> String {
    (0..country.bban_length())
        .map(|_| {
            let pool = if rng.gen_bool(0.75) { DIGITS } else { ALPHANUM };
            char::from(pool[rng.gen_range(0..pool.len())])
        })
        .collect()
}

/// Generates a valid electronic-form IBAN for `country`.
///
/// Algorithm: draw a BBAN, then compute the two check digits so that the
/// MOD 97-10 remainder of the whole IBAN is 1.
pub fn gen_valid_iban(rng: &mut StdRng, country: Country) -> String {
    let bban = gen_bban(rng, country);
    let check = compute_check_digits(country, &bban).unwrap_or_else(|| "00".to_owned());
    format!("{}{check}{bban}", country.code())
}

/// Replaces one digit after the check digits with a different digit.
///
/// A single substituted digit always changes the MOD 97-10 remainder, so the
/// result never validates. Returns `None` when the BBAN holds no digit.
pub fn corrupt_digit(rng: &mut StdRng, iban: &str) -> Option<String> {
    let positions: Vec<usize> = iban
        .char_indices()
        .skip(4)
        .filter(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)
        .collect();
    if positions.is_empty() {
        return None;
    }
    let at = positions[rng.gen_range(0..positions.len())];
    let old = iban.as_bytes()[at] - b'0';
    let new = (old + rng.gen_range(1..10)) % 10;
    let mut corrupted = iban.to_owned();
    corrupted.replace_range(at..=at, &new.to_string());
    Some(corrupted)
}

/// Lower-cases the grouped display form, e.g. `de44 5001 0517 5407 3249 31`.
pub fn to_display_form(iban: &str) -> String {
    format(iban).unwrap_or_else(|| iban.to_owned()).to_lowercase()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn bban_has_registry_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for &country in Country::ALL {
            assert_eq!(gen_bban(&mut rng, country).len(), country.bban_length());
        }
    }

    #[test]
    fn generated_iban_validates() {
        let mut rng = StdRng::seed_from_u64(42);
        for &country in Country::ALL {
            let iban = gen_valid_iban(&mut rng, country);
            assert!(iban_core::is_valid(&iban), "{iban}");
        }
    }

    #[test]
    fn corrupted_iban_fails_checksum_only() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let iban = gen_valid_iban(&mut rng, Country::France);
            let Some(bad) = corrupt_digit(&mut rng, &iban) else {
                continue;
            };
            assert_ne!(bad, iban);
            assert_eq!(
                iban_core::validate(&bad),
                vec![iban_core::Violation::InvalidChecksum],
                "{bad}"
            );
        }
    }

    #[test]
    fn corrupt_digit_needs_a_digit() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(corrupt_digit(&mut rng, "GB82WESTABCDEF"), None);
    }

    #[test]
    fn display_form_still_validates() {
        let display = to_display_form("DE44500105175407324931");
        assert_eq!(display, "de44 5001 0517 5407 3249 31");
        assert!(iban_core::is_valid(&display));
    }
}
