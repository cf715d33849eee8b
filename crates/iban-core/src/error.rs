/// Error types returned by the fallible entry points of `iban-core`.
///
/// Validation itself never fails: [`crate::validate`] returns violations as
/// plain data. These types exist for callers that want a `Result`:
/// [`crate::ensure_valid`], [`crate::Iban`] construction, and parsing a
/// [`crate::Country`] from its code.
use thiserror::Error;

use crate::validation::Violation;

/// Every violation found for an IBAN that failed validation.
///
/// Carries the full, ordered violation list so a caller can present all
/// problems at once. Never constructed with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid IBAN: {}", join_violations(.violations))]
pub struct ValidationError {
    /// The violations, in rule execution order.
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns the violations as a slice.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// A code that is not in the IBAN country registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown IBAN country code {code:?}")]
pub struct UnknownCountryCode {
    /// The rejected code, as given.
    pub code: String,
}

/// Errors produced when constructing an [`crate::Iban`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input failed one or more validation rules.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ParseError {
    /// The violations that caused the input to be rejected.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid(err) => err.violations(),
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
