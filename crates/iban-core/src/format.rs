/// Display formatting of IBANs: the familiar space-delimited "paper" form.
///
/// Every registry country has a [`FormatMask`] describing how its IBAN is
/// grouped for display. Most countries group by four characters from the
/// left; countries with an irregular convention carry an explicit mask.
use std::borrow::Cow;
use std::fmt;

use crate::charset::clean;
use crate::country::Country;

/// Group width used when a country has no explicit display convention.
pub const DEFAULT_GROUP_WIDTH: usize = 4;

/// Positional template controlling where display separators go.
///
/// A mask is a sequence of group widths. A separator is inserted before every
/// character whose index is a group boundary strictly inside the mask.
/// Characters past the end of the mask continue the final group, so the mask
/// can be applied to input of any length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatMask {
    groups: Cow<'static, [usize]>,
}

impl FormatMask {
    /// Groups `length` characters by [`DEFAULT_GROUP_WIDTH`], leaving any
    /// remainder as a shorter final group.
    pub fn grouped(length: usize) -> Self {
        let mut groups = vec![DEFAULT_GROUP_WIDTH; length / DEFAULT_GROUP_WIDTH];
        if length % DEFAULT_GROUP_WIDTH != 0 {
            groups.push(length % DEFAULT_GROUP_WIDTH);
        }
        Self {
            groups: Cow::Owned(groups),
        }
    }

    /// A mask with explicitly listed group widths.
    pub const fn explicit(groups: &'static [usize]) -> Self {
        Self {
            groups: Cow::Borrowed(groups),
        }
    }

    /// The group widths, left to right.
    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    /// Total number of characters the mask covers.
    pub fn len(&self) -> usize {
        self.groups.iter().sum()
    }

    /// Returns `true` if the mask covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a separator goes immediately before character `index`.
    pub fn breaks_before(&self, index: usize) -> bool {
        if index == 0 || index >= self.len() {
            return false;
        }
        let mut boundary = 0;
        for width in self.groups.iter() {
            boundary += width;
            if boundary == index {
                return true;
            }
            if boundary > index {
                break;
            }
        }
        false
    }

    /// Walks `text` left to right, inserting a single space wherever the mask
    /// calls for a separator.
    ///
    /// The length of `text` is not checked against the mask.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + self.groups.len());
        for (index, c) in text.chars().enumerate() {
            if self.breaks_before(index) {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for FormatMask {
    /// Writes the group widths joined by `-`, e.g. `4-4-4-4-4-4-3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, width) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{width}")?;
        }
        Ok(())
    }
}

/// Formats `iban` for display using its country's mask.
///
/// The input is cleaned first. Returns `None` when the first two cleaned
/// characters are not a registry country code. Length and checksum are not
/// validated: the mask is applied to however many characters are present.
///
/// # Examples
///
/// ```
/// use iban_core::format;
///
/// assert_eq!(
///     format("fr2730003000309332627391239").as_deref(),
///     Some("FR27 3000 3000 3093 3262 7391 239")
/// );
/// assert_eq!(format("ZZ17 3000"), None);
/// ```
pub fn format(iban: &str) -> Option<String> {
    let cleaned = clean(iban);
    let country = Country::from_iban_prefix(&cleaned)?;
    Some(country.format_mask().apply(&cleaned))
}
