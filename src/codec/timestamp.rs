use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

/// `chrono` layout of Cabrillo timestamps: `YYYY-MM-DD HHMM`, always UTC.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H%M";

// Written in place of a missing timestamp; reads back as `None`.
const ZERO_TIMESTAMP: &str = "0001-01-01 0000";

/// Parses a date and a time token. Returns `None` for malformed input and
/// for the zero timestamp.
pub fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(&format!("{date} {time}"), TIMESTAMP_LAYOUT).ok()?;
    if is_zero(&naive) {
        return None;
    }
    Some(naive.and_utc())
}

/// Formats a timestamp as `YYYY-MM-DD HHMM`, dropping seconds.
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp.format(TIMESTAMP_LAYOUT).to_string(),
        None => ZERO_TIMESTAMP.to_string(),
    }
}

fn is_zero(timestamp: &NaiveDateTime) -> bool {
    timestamp.year() == 1
        && timestamp.ordinal() == 1
        && timestamp.hour() == 0
        && timestamp.minute() == 0
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_date_and_time_tokens() {
        assert_eq!(
            parse_timestamp("2024-01-13", "1423"),
            Some(Utc.with_ymd_and_hms(2024, 1, 13, 14, 23, 0).unwrap())
        );
    }

    #[test]
    fn midnight() {
        assert_eq!(
            parse_timestamp("2024-01-14", "0000"),
            Some(Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn malformed_input_is_none() {
        assert_eq!(parse_timestamp("2024-13-01", "1423"), None);
        assert_eq!(parse_timestamp("2024-01-13", "2561"), None);
        assert_eq!(parse_timestamp("13.01.2024", "1423"), None);
        assert_eq!(parse_timestamp("", ""), None);
    }

    #[test]
    fn zero_timestamp_reads_as_none() {
        assert_eq!(parse_timestamp("0001-01-01", "0000"), None);
    }

    #[test]
    fn formats_without_seconds() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 13, 14, 23, 59).unwrap();
        assert_eq!(format_timestamp(Some(timestamp)), "2024-01-13 1423");
    }

    #[test]
    fn none_formats_as_zero_timestamp() {
        assert_eq!(format_timestamp(None), "0001-01-01 0000");
    }
}
