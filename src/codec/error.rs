/// Errors that can occur while reading or writing a Cabrillo log.
///
/// Malformed content never fails a read; only the underlying stream can.
#[derive(Debug, thiserror::Error)]
pub enum CabrilloError {
    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
