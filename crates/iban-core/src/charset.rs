/// Character-level preparation of raw IBAN input.
///
/// [`clean`] turns user input into the canonical electronic form the rule
/// pipeline works on, and [`forbidden_characters`] reports every character of
/// that form that may not appear in an IBAN.
use std::sync::LazyLock;

use regex::Regex;

/// Any single character outside `A-Z` and `0-9`.
///
/// The regex engine is Unicode-aware, so each match is exactly one scalar
/// value: an emoji is reported as itself, never split into bytes.
static FORBIDDEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Z0-9]")
        .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

/// Removes every whitespace character and upper-cases the rest.
///
/// Whitespace is anything [`char::is_whitespace`] accepts (spaces, tabs,
/// newlines, no-break spaces, ...). Never fails; the empty string cleans to
/// the empty string.
///
/// # Examples
///
/// ```
/// use iban_core::clean;
///
/// assert_eq!(clean(" fr27 3000\t3000 "), "FR2730003000");
/// assert_eq!(clean(""), "");
/// ```
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Returns `true` for the characters an IBAN may contain: `A-Z` and `0-9`.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Returns every forbidden character of `cleaned`, in input order.
///
/// The result is empty when `cleaned` consists only of `A-Z` and `0-9`.
///
/// # Examples
///
/// ```
/// use iban_core::forbidden_characters;
///
/// assert_eq!(forbidden_characters("FR27-3000_3000"), "-_");
/// assert_eq!(forbidden_characters("FR2730003000309332627391239"), "");
/// ```
pub fn forbidden_characters(cleaned: &str) -> String {
    FORBIDDEN_RE
        .find_iter(cleaned)
        .map(|m| m.as_str())
        .collect()
}
