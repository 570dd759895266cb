use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, validate_callsign, validate_locator};

/// An amateur radio callsign in canonical (trimmed, uppercase) form.
///
/// [`Callsign::new`] normalises without validating so that logs with odd
/// callsigns still round-trip; use [`str::parse`] for the strict form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Callsign(String);

impl Callsign {
    pub fn new(call: impl AsRef<str>) -> Self {
        Self(call.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the callsign passes [`validate_callsign`].
    pub fn is_valid(&self) -> bool {
        validate_callsign(&self.0).is_ok()
    }
}

impl FromStr for Callsign {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let call = Self::new(s);
        validate_callsign(&call.0)?;
        Ok(call)
    }
}

impl From<&str> for Callsign {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[mutants::skip]
impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Maidenhead grid locator in canonical case: field and square
/// uppercase, subsquare lowercase (`JO31le`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    pub fn new(locator: impl AsRef<str>) -> Self {
        let normalized = locator
            .as_ref()
            .trim()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if (4..6).contains(&i) {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect();
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        validate_locator(&self.0).is_ok()
    }
}

impl FromStr for Locator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let locator = Self::new(s);
        validate_locator(&locator.0)?;
        Ok(locator)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[mutants::skip]
impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
