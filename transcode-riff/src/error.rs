//! Error types for RIFF writing

use std::io;
use thiserror::Error;

/// Result type for RIFF operations
pub type Result<T> = std::result::Result<T, RiffError>;

/// Errors that can occur while writing a RIFF container
///
/// Building a container never fails; only handing the finished bytes to a
/// sink can.
#[derive(Error, Debug)]
pub enum RiffError {
    /// The sink accepted fewer bytes than the serialized container holds
    ///
    /// A sink that fails outright counts as having accepted nothing; its
    /// error is kept as the source.
    #[error("Short write: sink accepted {written} of {expected} bytes")]
    ShortWrite {
        written: usize,
        expected: usize,
        #[source]
        source: Option<io::Error>,
    },

    /// Flushing the sink failed after the full container was written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RiffError {
    /// Whether this error is a short write
    pub fn is_short_write(&self) -> bool {
        matches!(self, RiffError::ShortWrite { .. })
    }
}

impl From<RiffError> for io::Error {
    fn from(err: RiffError) -> Self {
        match err {
            RiffError::Io(e) => e,
            short @ RiffError::ShortWrite { .. } => io::Error::new(io::ErrorKind::WriteZero, short),
        }
    }
}
