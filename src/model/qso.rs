use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::callsign::Callsign;
use super::category::token_enum;
use super::frequency::Frequency;

token_enum! {
    /// Two-letter mode code of a QSO line.
    QsoMode {
        Cw => "CW",
        Phone => "PH",
        Fm => "FM",
        Rtty => "RY",
        Digi => "DG",
    }
}

/// One side of a QSO: the callsign and the exchange tokens after it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QsoInfo {
    pub call: Callsign,
    pub exchange: Vec<String>,
}

impl QsoInfo {
    pub fn new<I, S>(call: impl Into<Callsign>, exchange: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            call: call.into(),
            exchange: exchange.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single contact record (`QSO:` or `X-QSO:` line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qso {
    pub frequency: Frequency,
    pub mode: QsoMode,
    /// `None` when the line carried no parseable date and time.
    pub timestamp: Option<DateTime<Utc>>,
    pub sent: QsoInfo,
    pub received: QsoInfo,
    pub transmitter: i32,
}

impl Qso {
    pub fn new(
        frequency: impl Into<Frequency>,
        mode: QsoMode,
        timestamp: Option<DateTime<Utc>>,
        sent: QsoInfo,
        received: QsoInfo,
    ) -> Self {
        Self {
            frequency: frequency.into(),
            mode,
            timestamp,
            sent,
            received,
            transmitter: 0,
        }
    }

    /// Sets the transmitter number, for multi-transmitter categories.
    pub fn with_transmitter(mut self, transmitter: i32) -> Self {
        self.transmitter = transmitter;
        self
    }
}
