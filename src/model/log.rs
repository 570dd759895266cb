use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::callsign::{Callsign, Locator};
use super::category::Category;
use super::qso::Qso;
use super::tag::{CANONICAL_TAGS, Tag};
use super::validation::ValidationError;

pub const VERSION_2: &str = "2.0";
pub const VERSION_3: &str = "3.0";

/// Postal address of the entrant. `text` may hold several lines separated by `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub text: String,
    pub city: String,
    pub state_province: String,
    pub postalcode: String,
    pub country: String,
}

/// A declared off-air period. Absent when either endpoint is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offtime {
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl Offtime {
    pub fn new(begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            begin: Some(begin),
            end: Some(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.begin.is_none() || self.end.is_none()
    }

    /// Returns the length of the off-air period, or `None` if it is not set.
    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => Some(end - begin),
            _ => None,
        }
    }
}

/// A Cabrillo contest log: header fields plus the QSO records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub cabrillo_version: String,
    pub callsign: Callsign,
    pub contest: String,
    pub category: Category,
    pub certificate: bool,
    pub claimed_score: i64,
    pub club: String,
    pub created_by: String,
    pub email: String,
    pub grid_locator: Locator,
    pub location: String,
    pub name: String,
    pub address: Address,
    pub operators: Vec<Callsign>,
    /// Station owner, written with an `@` prefix on the OPERATORS line.
    pub host: Callsign,
    pub offtime: Offtime,
    pub soapbox: String,
    pub debug: i32,
    /// Tags without a dedicated field, extension (`X-`) tags in particular.
    pub custom: BTreeMap<Tag, String>,
    pub qso_data: Vec<Qso>,
    pub ignored_qsos: Vec<Qso>,
}

impl Log {
    /// Creates an empty log for Cabrillo version 3.0.
    pub fn new() -> Self {
        Self {
            cabrillo_version: VERSION_3.to_string(),
            callsign: Callsign::default(),
            contest: String::new(),
            category: Category::default(),
            certificate: false,
            claimed_score: 0,
            club: String::new(),
            created_by: String::new(),
            email: String::new(),
            grid_locator: Locator::default(),
            location: String::new(),
            name: String::new(),
            address: Address::default(),
            operators: Vec::new(),
            host: Callsign::default(),
            offtime: Offtime::default(),
            soapbox: String::new(),
            debug: 0,
            custom: BTreeMap::new(),
            qso_data: Vec::new(),
            ignored_qsos: Vec::new(),
        }
    }

    /// Adds a QSO to this log.
    pub fn add_qso(&mut self, qso: Qso) {
        self.qso_data.push(qso);
    }

    /// Adds a QSO that is kept in the file but excluded from scoring (`X-QSO`).
    pub fn add_ignored_qso(&mut self, qso: Qso) {
        self.ignored_qsos.push(qso);
    }

    /// Sets an extension field, returning the previous value.
    ///
    /// Only `X-` tags other than `X-QSO` are accepted.
    pub fn set_custom(
        &mut self,
        tag: impl Into<Tag>,
        value: impl Into<String>,
    ) -> Result<Option<String>, ValidationError> {
        let tag = tag.into();
        if !tag.is_custom() {
            return Err(ValidationError::InvalidCustomTag(tag.to_string()));
        }
        Ok(self.custom.insert(tag, value.into()))
    }

    /// Drops custom entries whose value is empty.
    pub fn remove_empty_custom(&mut self) {
        self.custom.retain(|_, value| !value.is_empty());
    }

    /// Returns the default header tag sequence: the canonical tags followed by
    /// every custom tag that has no dedicated field.
    pub fn canonical_tags(&self) -> Vec<Tag> {
        CANONICAL_TAGS
            .iter()
            .cloned()
            .chain(self.custom.keys().filter(|tag| !tag.is_known()).cloned())
            .collect()
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::{QsoInfo, QsoMode};

    fn make_qso() -> Qso {
        Qso::new(
            "14042",
            QsoMode::Cw,
            Some(Utc.with_ymd_and_hms(2024, 1, 13, 14, 23, 0).unwrap()),
            QsoInfo::new("DL1ABC", ["599", "001"]),
            QsoInfo::new("W1XYZ", ["599", "042"]),
        )
    }

    #[test]
    fn new_log_defaults_to_version_3() {
        let log = Log::new();
        assert_eq!(log.cabrillo_version, "3.0");
        assert!(log.callsign.is_empty());
        assert!(log.qso_data.is_empty());
        assert!(log.ignored_qsos.is_empty());
        assert!(log.custom.is_empty());
    }

    #[test]
    fn default_equals_new() {
        assert_eq!(Log::default(), Log::new());
    }

    #[test]
    fn qsos_keep_insertion_order() {
        let mut log = Log::new();
        log.add_qso(make_qso());
        log.add_qso(make_qso().with_transmitter(1));
        log.add_ignored_qso(make_qso());
        assert_eq!(log.qso_data.len(), 2);
        assert_eq!(log.qso_data[1].transmitter, 1);
        assert_eq!(log.ignored_qsos.len(), 1);
    }

    #[test]
    fn set_custom_accepts_extension_tags() {
        let mut log = Log::new();
        assert_eq!(log.set_custom("x-instance", "1"), Ok(None));
        assert_eq!(log.set_custom("X-INSTANCE", "2"), Ok(Some("1".to_string())));
        assert_eq!(log.custom.get(&Tag::new("X-INSTANCE")), Some(&"2".to_string()));
    }

    #[test]
    fn set_custom_rejects_x_qso_and_plain_tags() {
        let mut log = Log::new();
        assert_eq!(
            log.set_custom("X-QSO", "x"),
            Err(ValidationError::InvalidCustomTag("X-QSO".to_string()))
        );
        assert_eq!(
            log.set_custom("CLUB", "x"),
            Err(ValidationError::InvalidCustomTag("CLUB".to_string()))
        );
        assert!(log.custom.is_empty());
    }

    #[test]
    fn remove_empty_custom_keeps_values() {
        let mut log = Log::new();
        log.set_custom("X-A", "").unwrap();
        log.set_custom("X-B", "b").unwrap();
        log.remove_empty_custom();
        assert_eq!(log.custom.len(), 1);
        assert!(log.custom.contains_key(&Tag::new("X-B")));
    }

    #[test]
    fn canonical_tags_append_custom_tags_sorted() {
        let mut log = Log::new();
        log.set_custom("X-ZULU", "z").unwrap();
        log.set_custom("X-ALPHA", "a").unwrap();
        let tags = log.canonical_tags();
        assert_eq!(tags[0], Tag::CREATED_BY);
        let tail: Vec<&str> = tags[tags.len() - 2..].iter().map(Tag::as_str).collect();
        assert_eq!(tail, vec!["X-ALPHA", "X-ZULU"]);
    }

    #[test]
    fn offtime_is_empty_unless_both_ends_set() {
        let begin = Utc.with_ymd_and_hms(2024, 1, 13, 10, 0, 0).unwrap();
        assert!(Offtime::default().is_empty());
        let half = Offtime {
            begin: Some(begin),
            end: None,
        };
        assert!(half.is_empty());
        assert_eq!(half.duration(), None);
    }

    #[test]
    fn offtime_duration() {
        let begin = Utc.with_ymd_and_hms(2024, 1, 13, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 13, 11, 30, 0).unwrap();
        let offtime = Offtime::new(begin, end);
        assert!(!offtime.is_empty());
        assert_eq!(offtime.duration(), Some(TimeDelta::minutes(90)));
    }

    #[test]
    fn serde_round_trip() {
        let mut log = Log::new();
        log.callsign = Callsign::new("DL1ABC");
        log.set_custom("X-FOO", "bar").unwrap();
        log.add_qso(make_qso());
        let json = serde_json::to_string(&log).unwrap();
        let deserialized: Log = serde_json::from_str(&json).unwrap();
        assert_eq!(log, deserialized);
    }
}
