//! Baby/device identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// An opaque identifier for one monitored camera/device.
///
/// Used to scope data queries and to build stream and control-channel URLs.
/// The value is server-assigned; validation only rejects strings that could
/// not appear in a URL path segment.
///
/// # Example
///
/// ```
/// use nanit_core::BabyUid;
///
/// let uid = BabyUid::new("abc123").unwrap();
/// assert_eq!(uid.as_str(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BabyUid(String);

impl BabyUid {
    /// Create a new baby UID from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains characters that
    /// cannot appear in a URL path segment.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the UID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::BabyUid {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.chars().any(|c| c.is_whitespace() || c == '/' || c == '?') {
            return Err(InvalidInputError::BabyUid {
                value: s.to_string(),
                reason: "must not contain whitespace, '/' or '?'".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BabyUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BabyUid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BabyUid {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BabyUid> for String {
    fn from(uid: BabyUid) -> Self {
        uid.0
    }
}
