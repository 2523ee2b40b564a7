//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Optional leading `+`, then 7-15 digits, spaces or dashes.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{7,15}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty or blank.
    #[error("phone cannot be empty")]
    Empty,
    /// The input is not 7-15 digits, spaces or dashes with an optional `+`.
    #[error("phone is not a valid number")]
    Malformed,
}

/// A contact phone number, stored as typed by the customer.
///
/// ```
/// use larek_core::Phone;
///
/// assert!(Phone::parse("+1 555-123-4567").is_ok());
/// assert!(Phone::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from a string.
    ///
    /// The whole input must match, so a leading space before `+` or padding
    /// past 15 characters is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or does not match the accepted
    /// number shape.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.trim().is_empty() {
            return Err(PhoneError::Empty);
        }
        if !PHONE_RE.is_match(s) {
            return Err(PhoneError::Malformed);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_phones() {
        assert!(Phone::parse("+1 555-123-4567").is_ok());
        assert!(Phone::parse("+79991234567").is_ok());
        assert!(Phone::parse("8 999 123 45 67").is_ok());
        assert!(Phone::parse("1234567").is_ok());
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(Phone::parse("12345"), Err(PhoneError::Malformed));
    }

    #[test]
    fn test_parse_too_long() {
        assert_eq!(
            Phone::parse("+1234567890123456"),
            Err(PhoneError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_letters_and_inner_plus() {
        assert_eq!(Phone::parse("555-CALL-NOW"), Err(PhoneError::Malformed));
        assert_eq!(Phone::parse("1+5551234567"), Err(PhoneError::Malformed));
    }

    #[test]
    fn test_parse_matches_raw_input() {
        assert_eq!(Phone::parse(" +1234567"), Err(PhoneError::Malformed));
        assert_eq!(
            Phone::parse("   +1 555-123-4567   "),
            Err(PhoneError::Malformed)
        );
        assert_eq!(Phone::parse("1234567 ").unwrap().as_str(), "1234567 ");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Phone::parse(""), Err(PhoneError::Empty));
        assert_eq!(Phone::parse("        "), Err(PhoneError::Empty));
    }
}
