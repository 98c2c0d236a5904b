//! Error types and path context for domino operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all domino operations
#[derive(Debug)]
pub enum DominoError {
    /// Tile count was not a positive integer
    InvalidInput {
        /// Text or number that was rejected
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system or console operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Tile snapshot could not be encoded or decoded
    Serialization {
        /// Snapshot file involved
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Logger could not be started
    Logging {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },
}

impl fmt::Display for DominoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { value, reason } => {
                write!(f, "Invalid input '{value}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "Snapshot '{}' is not valid JSON: {source}", path.display())
            }
            Self::Logging { source } => {
                write!(f, "Failed to start logger: {source}")
            }
        }
    }
}

impl std::error::Error for DominoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            Self::InvalidInput { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for domino results
pub type Result<T> = std::result::Result<T, DominoError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`DominoError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| DominoError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for DominoError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<console>"),
            operation: "console I/O",
            source: err,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for DominoError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid input error
pub fn invalid_input(value: &impl ToString, reason: &impl ToString) -> DominoError {
    DominoError::InvalidInput {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DominoError {
    DominoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
