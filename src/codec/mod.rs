//! Cabrillo text codec.
//!
//! [`read`] turns a byte stream into a [`Log`](crate::model::Log), tolerating
//! malformed lines; [`write`] emits a log in canonical order with long
//! free-text lines wrapped to [`MAX_LINE_LENGTH`] characters.

mod error;
mod reader;
mod timestamp;
mod wrap;
mod writer;

pub use error::CabrilloError;
pub use reader::{AmbiguousQso, ReadReport, SkipReason, SkippedLine, read, read_with_report};
pub use timestamp::{TIMESTAMP_LAYOUT, format_timestamp, parse_timestamp};
pub use wrap::MAX_LINE_LENGTH;
pub use writer::{format_log, format_qso, write, write_with_tags};
