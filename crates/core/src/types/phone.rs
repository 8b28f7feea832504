//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input does not match `NNN-NNN-NNNN`.
    #[error("phone number must match the format 555-123-4567")]
    InvalidFormat,
}

/// A phone number in the dashboard's canonical `NNN-NNN-NNNN` format.
///
/// This is the format the customer and order forms validate
/// (`^\d{3}-\d{3}-\d{4}$`) and the format all sample data uses.
///
/// ## Examples
///
/// ```
/// use orderdesk_core::Phone;
///
/// assert!(Phone::parse("555-123-4567").is_ok());
///
/// assert!(Phone::parse("5551234567").is_err());   // missing dashes
/// assert!(Phone::parse("555-123-456").is_err());  // short last group
/// assert!(Phone::parse("55a-123-4567").is_err()); // non-digit
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or does not match
    /// `NNN-NNN-NNNN` exactly.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let mut groups = s.split('-');
        let ok = matches!(
            (groups.next(), groups.next(), groups.next(), groups.next()),
            (Some(a), Some(b), Some(c), None)
                if is_digits(a, 3) && is_digits(b, 3) && is_digits(c, 4)
        );

        if !ok {
            return Err(PhoneError::InvalidFormat);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
