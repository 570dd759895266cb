//! Reader and writer for [Cabrillo V3](https://wwrof.org/cabrillo/) amateur
//! radio contest logs.
//!
//! ```
//! let input = "START-OF-LOG: 3.0\n\
//!              CALLSIGN: DL1ABC\n\
//!              QSO: 14042 CW 2024-01-13 1423 DL1ABC 599 001 W1XYZ 599 042\n\
//!              END-OF-LOG:\n";
//! let log = cabrillo::read(input.as_bytes()).unwrap();
//! assert_eq!(log.callsign.as_str(), "DL1ABC");
//! assert_eq!(log.qso_data.len(), 1);
//!
//! let output = cabrillo::format_log(&log, false).unwrap();
//! assert!(output.contains("QSO: 14042 CW 2024-01-13 1423 DL1ABC 599 001 W1XYZ 599 042\n"));
//! ```

pub mod codec;
mod file;
pub mod model;

pub use codec::{
    AmbiguousQso, CabrilloError, ReadReport, SkipReason, SkippedLine, format_log, format_qso,
    read, read_with_report, write, write_with_tags,
};
pub use file::{read_file, write_file};
pub use model::{Log, Qso, QsoInfo, Tag};
