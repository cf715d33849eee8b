/// Validated IBAN newtype.
///
/// [`Iban`] can only be constructed from input that passes every validation
/// rule, via [`TryFrom<&str>`] or [`FromStr`]. Once constructed the inner
/// value is immutable (no `DerefMut`). The serde `Deserialize` impl re-runs
/// validation so invalid data cannot enter the type system from untrusted
/// JSON.
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::charset::clean;
use crate::country::{Country, country_prefix};
use crate::error::{ParseError, ValidationError};
use crate::validation::{Violation, validate};

/// A structurally valid International Bank Account Number.
///
/// Stores the electronic form: no whitespace, upper-case. [`fmt::Display`]
/// prints the spaced display form; [`Deref`] and [`Iban::electronic`] give the
/// compact form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iban {
    electronic: String,
    country: Country,
}

impl TryFrom<&str> for Iban {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let violations = validate(s);
        if !violations.is_empty() {
            return Err(ValidationError { violations }.into());
        }
        let electronic = clean(s);
        let Some(country) = Country::from_iban_prefix(&electronic) else {
            let was = country_prefix(&electronic).unwrap_or(&electronic).to_owned();
            return Err(ValidationError {
                violations: vec![Violation::UnknownCountryCode { was }],
            }
            .into());
        };
        Ok(Self {
            electronic,
            country,
        })
    }
}

impl FromStr for Iban {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Iban {
    /// The registry country of this IBAN.
    pub fn country(&self) -> Country {
        self.country
    }

    /// The two check digits (characters 3 and 4).
    pub fn check_digits(&self) -> &str {
        &self.electronic[2..4]
    }

    /// The basic bank account number: everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.electronic[4..]
    }

    /// The compact electronic form, e.g. `"DE44500105175407324931"`.
    pub fn electronic(&self) -> &str {
        &self.electronic
    }

    /// The spaced display form, e.g. `"DE44 5001 0517 5407 3249 31"`.
    pub fn formatted(&self) -> String {
        self.country.format_mask().apply(&self.electronic)
    }
}

impl Deref for Iban {
    type Target = str;
    fn deref(&self) -> &str {
        &self.electronic
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.electronic
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Iban {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.electronic)
    }
}

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}
