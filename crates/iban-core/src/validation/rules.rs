/// The five IBAN validation rules.
///
/// Each rule is a plain function from the cleaned IBAN to an optional
/// [`Violation`]. Rules are independent of one another; they are listed in
/// [`super::RULES`] in execution order.
use crate::charset::forbidden_characters;
use crate::check_digits::checksum_remainder;
use crate::country::{Country, country_prefix};
use crate::validation::{MAX_IBAN_LENGTH, Violation};

/// Length in characters, not bytes: a multi-byte character counts once.
fn char_len(cleaned: &str) -> usize {
    cleaned.chars().count()
}

/// Rejects any character outside `A-Z` and `0-9`.
pub fn allowed_characters(cleaned: &str) -> Option<Violation> {
    let saw = forbidden_characters(cleaned);
    if saw.is_empty() {
        None
    } else {
        Some(Violation::ContainsForbiddenCharacters { saw })
    }
}

/// Rejects a two-character prefix that is not a registry country code.
///
/// Input shorter than two characters has no prefix and is not reported here.
pub fn known_country_code(cleaned: &str) -> Option<Violation> {
    let prefix = country_prefix(cleaned)?;
    if Country::from_code(prefix).is_some() {
        None
    } else {
        Some(Violation::UnknownCountryCode {
            was: prefix.to_owned(),
        })
    }
}

/// Rejects a length different from the registry length of a known country.
pub fn country_length(cleaned: &str) -> Option<Violation> {
    let country = Country::from_iban_prefix(cleaned)?;
    let expected = country.iban_length();
    let got = char_len(cleaned);
    if got == expected {
        None
    } else {
        Some(Violation::ExceedsCountryLengthSpecification { expected, got })
    }
}

/// Rejects anything longer than [`MAX_IBAN_LENGTH`].
pub fn maximum_length(cleaned: &str) -> Option<Violation> {
    let was = char_len(cleaned);
    if was > MAX_IBAN_LENGTH {
        Some(Violation::ExceedsMaximumLength { was })
    } else {
        None
    }
}

/// Rejects a MOD 97-10 remainder other than 1.
///
/// When the remainder cannot be computed this rule reports nothing, with one
/// exception: input shorter than two characters is too short to hold a
/// country code and check digits, and no other rule can report it, so it
/// fails the checksum.
pub fn checksum(cleaned: &str) -> Option<Violation> {
    match checksum_remainder(cleaned) {
        Some(1) => None,
        Some(_) => Some(Violation::InvalidChecksum),
        None if char_len(cleaned) < 2 => Some(Violation::InvalidChecksum),
        None => None,
    }
}
