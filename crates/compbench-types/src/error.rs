//! Error types and handling for compbench
//!
//! Only two failures stop a run: the input file cannot be read, or the
//! configuration is invalid. Everything else degrades to "this one item is
//! missing from the output" and is reported inline.

use std::path::PathBuf;

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Low severity - the item is skipped, the run continues
    Low,
    /// Medium severity - the item failed, the run continues
    Medium,
    /// High severity - the run cannot start
    High,
}

/// Main error type for compbench operations
#[derive(thiserror::Error, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The input file could not be read
    #[error("Failed to read input '{path}': {message}")]
    InputRead {
        /// Path of the input file
        path: PathBuf,
        /// Error message from the read
        message: String,
    },

    /// The algorithm is not registered or has no codec on this platform
    #[error("Unsupported algorithm: {id}")]
    UnsupportedAlgorithm {
        /// Algorithm identifier that was requested
        id: String,
    },

    /// A selection token did not match any benchmarkable algorithm
    #[error("Unknown algorithm token: {token}")]
    UnknownToken {
        /// Token as supplied by the user, after normalization
        token: String,
    },

    /// The codec library rejected the input or the level
    #[error("{algorithm} compression failed: {message}")]
    Codec {
        /// Algorithm identifier
        algorithm: String,
        /// Error message from the codec
        message: String,
    },

    /// A compressed payload could not be written
    #[error("Failed to write '{path}': {message}")]
    OutputWrite {
        /// Destination path
        path: PathBuf,
        /// Error message from the write
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },

    /// I/O error outside of input reads and output writes
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input read failure
    InputRead,
    /// Algorithm selection failures (unknown or unsupported)
    Selection,
    /// Codec failures
    Codec,
    /// Output write failures
    OutputWrite,
    /// Configuration errors
    Config,
    /// Other I/O errors
    Io,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputRead { .. } => ErrorKind::InputRead,
            Self::UnsupportedAlgorithm { .. } | Self::UnknownToken { .. } => ErrorKind::Selection,
            Self::Codec { .. } => ErrorKind::Codec,
            Self::OutputWrite { .. } => ErrorKind::OutputWrite,
            Self::Config { .. } => ErrorKind::Config,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Get the error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InputRead { .. } | Self::Config { .. } => ErrorSeverity::High,
            Self::UnsupportedAlgorithm { .. } | Self::UnknownToken { .. } => ErrorSeverity::Low,
            Self::Codec { .. } | Self::OutputWrite { .. } | Self::Io { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    /// Check if this error must abort the run
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::High
    }

    /// Create a new input read error
    pub fn input_read<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::InputRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new unsupported algorithm error
    pub fn unsupported<S: Into<String>>(id: S) -> Self {
        Self::UnsupportedAlgorithm { id: id.into() }
    }

    /// Create a new unknown token error
    pub fn unknown_token<S: Into<String>>(token: S) -> Self {
        Self::UnknownToken {
            token: token.into(),
        }
    }

    /// Create a new codec error
    pub fn codec<A: Into<String>, S: Into<String>>(algorithm: A, message: S) -> Self {
        Self::Codec {
            algorithm: algorithm.into(),
            message: message.into(),
        }
    }

    /// Create a new output write error
    pub fn output_write<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::OutputWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_error_kind_and_severity_consistency(message in ".*") {
            let errors = vec![
                Error::input_read("in.bin", message.clone()),
                Error::unsupported(message.clone()),
                Error::unknown_token(message.clone()),
                Error::codec("gzip", message.clone()),
                Error::output_write("out.gz", message.clone()),
                Error::config(message.clone()),
                Error::Io { message: message.clone() },
            ];

            for error in errors {
                let fatal = error.is_fatal();
                match error.kind() {
                    ErrorKind::InputRead | ErrorKind::Config => prop_assert!(fatal),
                    _ => prop_assert!(!fatal),
                }
            }
        }
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
    }

    #[test]
    fn test_input_read_is_fatal() {
        let error = Error::input_read("/nonexistent/file.txt", "No such file");

        assert_eq!(error.kind(), ErrorKind::InputRead);
        assert!(error.is_fatal());
        assert!(error.to_string().contains("/nonexistent/file.txt"));
    }

    #[test]
    fn test_codec_error_is_not_fatal() {
        let error = Error::codec("zstd", "invalid level");

        assert_eq!(error.kind(), ErrorKind::Codec);
        assert_eq!(error.severity(), ErrorSeverity::Medium);
        assert!(!error.is_fatal());
        assert_eq!(error.to_string(), "zstd compression failed: invalid level");
    }

    #[test]
    fn test_selection_errors_share_kind() {
        assert_eq!(Error::unsupported("lzo1").kind(), ErrorKind::Selection);
        assert_eq!(Error::unknown_token("bogus").kind(), ErrorKind::Selection);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test file");
        let error = Error::from(io_error);

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(!error.is_fatal());
        assert!(error.to_string().contains("test file"));
    }
}
