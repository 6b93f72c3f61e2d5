//! Zone code newtype
//!
//! JAKIM divides Malaysia into prayer-time zones identified by short codes
//! such as `SGR01` or `WLY01`. The code is opaque to this crate: it is only
//! checked for emptiness and whitespace, and the remote service decides
//! whether it is a known zone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zone identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use waktusolat::domain::zone::ZoneCode;
/// use std::str::FromStr;
///
/// let zone = ZoneCode::from_str("SGR01").unwrap();
/// assert_eq!(zone.as_str(), "SGR01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneCode(String);

impl ZoneCode {
    /// Creates a new ZoneCode from a string
    ///
    /// Leading and trailing whitespace is trimmed. Empty codes and codes with
    /// inner whitespace are rejected since they cannot name a zone and would
    /// end up in the output filename.
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err("Zone code cannot be empty".to_string());
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(format!("Zone code cannot contain whitespace: {trimmed:?}"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the zone code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ZoneCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ZoneCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoneCode> for String {
    fn from(zone: ZoneCode) -> Self {
        zone.0
    }
}

impl AsRef<str> for ZoneCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
