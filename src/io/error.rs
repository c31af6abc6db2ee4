//! Error types and path context for generation operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all generation operations
#[derive(Debug)]
pub enum StarloopError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A configured path does not exist
    MissingPath {
        /// Name of the setting that holds the path
        setting: &'static str,
        /// The path that could not be found
        path: PathBuf,
    },

    /// General file system operation failure
    ///
    /// Covers temporary file creation, writing, renaming into place
    /// and directory listing
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode an animation as GIF
    Encoding {
        /// Path the animation was being written to
        path: PathBuf,
        /// Underlying encoder error
        source: gif::EncodingError,
    },

    /// Signal handling could not be set up
    Signal {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Worker thread pool could not be created
    ThreadPool {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for StarloopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MissingPath { setting, path } => {
                write!(f, "Path for '{setting}' does not exist: '{}'", path.display())
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
            Self::Encoding { path, source } => {
                write!(f, "Failed to encode GIF to '{}': {source}", path.display())
            }
            Self::Signal { operation, source } => {
                write!(f, "Signal handling error during {operation}: {source}")
            }
            Self::ThreadPool { reason } => {
                write!(f, "Failed to build worker thread pool: {reason}")
            }
        }
    }
}

impl std::error::Error for StarloopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Signal { source, .. } => Some(source),
            Self::Encoding { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, StarloopError>;

/// Attaches the path and operation to bare I/O failures
pub trait WithPath<T> {
    /// Convert an I/O result into a generation result
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error wrapped in [`StarloopError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| StarloopError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StarloopError {
    StarloopError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
