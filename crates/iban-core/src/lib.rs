#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod charset;
pub mod check_digits;
pub mod country;
pub mod error;
pub mod format;
pub mod iban;
pub mod validation;

pub use charset::{clean, forbidden_characters, is_allowed};
pub use check_digits::{checksum_remainder, compute_check_digits, mod97_10};
pub use country::{Country, country_code, expected_length};
pub use error::{ParseError, UnknownCountryCode, ValidationError};
pub use format::{DEFAULT_GROUP_WIDTH, FormatMask, format};
pub use iban::Iban;
pub use validation::{
    MAX_IBAN_LENGTH, RULES, Rule, RuleId, Violation, ensure_valid, is_valid, validate,
};

/// Returns the current version of the iban-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
