use std::fs::{self, File};
use std::path::Path;

use crate::codec::{self, CabrilloError};
use crate::model::Log;

/// Reads a Cabrillo log from the file at `path`.
pub fn read_file(path: &Path) -> Result<Log, CabrilloError> {
    let file = File::open(path)?;
    codec::read(file)
}

/// Writes `log` to `path` in canonical order, replacing any existing file.
pub fn write_file(path: &Path, log: &Log, append_transmitter: bool) -> Result<(), CabrilloError> {
    let content = codec::format_log(log, append_transmitter)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use super::*;
    use crate::model::{Callsign, Qso, QsoInfo, QsoMode};

    fn make_log() -> Log {
        let mut log = Log::new();
        log.callsign = Callsign::new("DL1ABC");
        log.contest = "CQ-WW-CW".to_string();
        log.add_qso(Qso::new(
            "14042",
            QsoMode::Cw,
            Some(Utc.with_ymd_and_hms(2024, 1, 13, 14, 23, 0).unwrap()),
            QsoInfo::new("DL1ABC", ["599", "001"]),
            QsoInfo::new("W1XYZ", ["599", "042"]),
        ));
        log
    }

    // --- write_file / read_file tests ---

    #[test]
    fn write_creates_cabrillo_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");

        write_file(&path, &make_log(), true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("START-OF-LOG: 3.0\n"));
        assert!(content.contains("QSO: 14042 CW 2024-01-13 1423 DL1ABC 599 001 W1XYZ 599 042 0\n"));
        assert!(content.ends_with("END-OF-LOG: \n"));
    }

    #[test]
    fn write_then_read_returns_same_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.log");
        let log = make_log();

        write_file(&path, &log, true).unwrap();

        assert_eq!(read_file(&path).unwrap(), log);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");
        fs::write(&path, "stale content that is much longer than the new log").unwrap();

        write_file(&path, &Log::new(), false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = read_file(&dir.path().join("missing.log"));
        assert!(matches!(result, Err(CabrilloError::Io(_))));
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("test.log");
        let result = write_file(&path, &make_log(), true);
        assert!(matches!(result, Err(CabrilloError::Io(_))));
    }
}
