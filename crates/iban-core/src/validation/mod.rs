/// Violation types and rule dispatch for the IBAN validation pipeline.
///
/// This module defines [`Violation`] and [`RuleId`], the ordered rule list
/// [`RULES`], and the three entry points [`validate`], [`is_valid`], and
/// [`ensure_valid`].
///
/// Every rule runs against the cleaned IBAN, in the fixed order of
/// [`RULES`], and every rule always runs: the pipeline never fails fast.
pub mod rules;

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::charset::clean;
use crate::error::ValidationError;


/// The maximum length of any IBAN, in characters (ISO 13616).
pub const MAX_IBAN_LENGTH: usize = 34;

/// One independently detected defect of an IBAN.
///
/// Violations are plain data. They are collected, never thrown, and carry
/// enough payload to explain the problem to a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The MOD 97-10 remainder is not 1.
    InvalidChecksum,
    /// The first two characters are not a registry country code.
    UnknownCountryCode {
        /// The two-character prefix that was found.
        was: String,
    },
    /// The IBAN is longer than [`MAX_IBAN_LENGTH`].
    ExceedsMaximumLength {
        /// The actual length, in characters.
        was: usize,
    },
    /// The length differs from the registry length for the country.
    ///
    /// Despite the name this fires for IBANs that are too short as well as
    /// too long.
    ExceedsCountryLengthSpecification {
        /// The registry length for the country.
        expected: usize,
        /// The actual length, in characters.
        got: usize,
    },
    /// The IBAN contains characters other than `A-Z` and `0-9`.
    ContainsForbiddenCharacters {
        /// Every forbidden character, in input order.
        saw: String,
    },
}

impl Violation {
    /// The rule that produces this kind of violation.
    pub fn rule_id(&self) -> RuleId {
        match self {
            Self::ContainsForbiddenCharacters { .. } => RuleId::AllowedCharacters,
            Self::UnknownCountryCode { .. } => RuleId::KnownCountryCode,
            Self::ExceedsCountryLengthSpecification { .. } => RuleId::CountryLength,
            Self::ExceedsMaximumLength { .. } => RuleId::MaximumLength,
            Self::InvalidChecksum => RuleId::Checksum,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChecksum => f.write_str("checksum does not verify (MOD 97-10)"),
            Self::UnknownCountryCode { was } => write!(f, "unknown country code {was:?}"),
            Self::ExceedsMaximumLength { was } => {
                write!(
                    f,
                    "length {was} exceeds the maximum of {MAX_IBAN_LENGTH} characters"
                )
            }
            Self::ExceedsCountryLengthSpecification { expected, got } => {
                write!(f, "expected {expected} characters for this country, got {got}")
            }
            Self::ContainsForbiddenCharacters { saw } => {
                write!(f, "contains forbidden characters {saw:?}")
            }
        }
    }
}

/// Machine-readable identifier for a validation rule.
///
/// [`RuleId::code`] returns the stable kebab-case form used in CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Only `A-Z` and `0-9` may appear.
    AllowedCharacters,
    /// The first two characters name a registry country.
    KnownCountryCode,
    /// The length equals the registry length for the country.
    CountryLength,
    /// The length does not exceed [`MAX_IBAN_LENGTH`].
    MaximumLength,
    /// The MOD 97-10 remainder is 1.
    Checksum,
}

impl RuleId {
    /// Returns the canonical rule code string.
    pub fn code(self) -> &'static str {
        match self {
            Self::AllowedCharacters => "allowed-characters",
            Self::KnownCountryCode => "known-country-code",
            Self::CountryLength => "country-length",
            Self::MaximumLength => "maximum-length",
            Self::Checksum => "checksum",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single, stateless validation rule.
///
/// `check` receives the cleaned IBAN and returns at most one violation.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// The rule's identifier.
    pub id: RuleId,
    /// Inspects the cleaned IBAN.
    pub check: fn(&str) -> Option<Violation>,
}

/// The validation pipeline, in execution order.
///
/// Violations appear in a result in this order.
pub static RULES: [Rule; 5] = [
    Rule {
        id: RuleId::AllowedCharacters,
        check: rules::allowed_characters,
    },
    Rule {
        id: RuleId::KnownCountryCode,
        check: rules::known_country_code,
    },
    Rule {
        id: RuleId::CountryLength,
        check: rules::country_length,
    },
    Rule {
        id: RuleId::MaximumLength,
        check: rules::maximum_length,
    },
    Rule {
        id: RuleId::Checksum,
        check: rules::checksum,
    },
];

/// Runs every rule against `iban` and collects all violations.
///
/// The input is cleaned first (whitespace removed, upper-cased). Returns an
/// empty vector for a valid IBAN. Never fails and never short-circuits.
///
/// # Examples
///
/// ```
/// use iban_core::{Violation, validate};
///
/// assert!(validate("FR27 3000 3000 3093 3262 7391 239").is_empty());
/// assert_eq!(
///     validate("FR2830003000309332627391239"),
///     vec![Violation::InvalidChecksum]
/// );
/// ```
pub fn validate(iban: &str) -> Vec<Violation> {
    let cleaned = clean(iban);
    let violations: Vec<Violation> = RULES
        .iter()
        .filter_map(|rule| {
            let violation = (rule.check)(&cleaned)?;
            trace!(rule = %rule.id, %violation, "rule fired");
            Some(violation)
        })
        .collect();
    debug!(
        length = cleaned.chars().count(),
        violations = violations.len(),
        "validated IBAN"
    );
    violations
}

/// Returns `true` if `iban` produces no violations.
pub fn is_valid(iban: &str) -> bool {
    validate(iban).is_empty()
}

/// Validates `iban`, converting any violations into a single error.
///
/// # Errors
///
/// Returns [`ValidationError`] carrying every violation, in rule order, when
/// [`validate`] reports at least one.
pub fn ensure_valid(iban: &str) -> Result<(), ValidationError> {
    let violations = validate(iban);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}
