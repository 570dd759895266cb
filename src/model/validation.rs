use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for the strict constructors of model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty callsign")]
    EmptyCallsign,
    #[error("invalid callsign: {0}")]
    InvalidCallsign(String),
    #[error("invalid grid locator: {0}")]
    InvalidLocator(String),
    #[error("not an extension tag: {0}")]
    InvalidCustomTag(String),
}

static LOCATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-R]{2}[0-9]{2}([a-x]{2}([0-9]{2})?)?$").expect("valid hardcoded regex")
});

fn is_callsign_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '/'
}

/// Checks a canonical callsign: letters, digits and `/` portable designators
/// (`DL/W1AW/P`), nothing else.
pub fn validate_callsign(call: &str) -> Result<(), ValidationError> {
    if call.is_empty() {
        return Err(ValidationError::EmptyCallsign);
    }
    if !call.chars().all(is_callsign_char) {
        return Err(ValidationError::InvalidCallsign(call.to_string()));
    }
    Ok(())
}

/// Validates a Maidenhead locator in canonical case (e.g. `JO31`, `JO31le`, `JO31le42`).
pub fn validate_locator(locator: &str) -> Result<(), ValidationError> {
    if LOCATOR_RE.is_match(locator) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLocator(locator.to_string()))
    }
}
