use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for separation operations
pub type DemucsResult<T> = Result<T, DemucsError>;

/// Error types for configuring and running a separation
#[derive(Error, Debug)]
pub enum DemucsError {
    /// IO error (directory creation, path resolution)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported model or stem name
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input audio file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// External process could not be started
    #[error("Failed to launch {program}: {source}")]
    Launch {
        /// Program that was being launched
        program: String,
        /// Underlying spawn error
        #[source]
        source: io::Error,
    },

    /// External process exited with a non-zero status
    #[error("Demucs separation failed: {stderr}")]
    SeparationFailed {
        /// Exit code, if the process was not killed by a signal
        status: Option<i32>,
        /// Captured standard error of the process
        stderr: String,
    },

    /// Stem file could not be read as WAV
    #[error("WAV error: {0}")]
    Wav(String),
}

impl DemucsError {
    /// Captured standard error, for failed separations
    pub fn stderr(&self) -> Option<&str> {
        match self {
            DemucsError::SeparationFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

impl From<hound::Error> for DemucsError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => DemucsError::Io(e),
            e => DemucsError::Wav(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_only_for_failed_separation() {
        let err = DemucsError::SeparationFailed {
            status: Some(1),
            stderr: "CUDA out of memory".to_string(),
        };
        assert_eq!(err.stderr(), Some("CUDA out of memory"));
        assert_eq!(err.to_string(), "Demucs separation failed: CUDA out of memory");

        let err = DemucsError::InputNotFound(PathBuf::from("missing.mp3"));
        assert_eq!(err.stderr(), None);
        assert_eq!(err.to_string(), "Input file not found: missing.mp3");
    }

    #[test]
    fn test_hound_io_error_maps_to_io() {
        let err: DemucsError =
            hound::Error::IoError(io::Error::new(io::ErrorKind::NotFound, "gone")).into();
        assert!(matches!(err, DemucsError::Io(_)));

        let err: DemucsError = hound::Error::Unsupported.into();
        assert!(matches!(err, DemucsError::Wav(_)));
    }
}
