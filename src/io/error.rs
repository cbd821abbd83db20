//! Error types for pattern generation, export and upload handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all kolamgen operations
#[derive(Debug)]
pub enum KolamError {
    /// Generation was requested without choosing a pattern type
    MissingPatternType,

    /// Pattern tag did not name one of the five styles
    ///
    /// Only raised by strict parsing; rendering treats unknown tags as a
    /// guide-dot-only pattern instead.
    UnknownPatternType {
        /// The tag that failed to parse
        tag: String,
    },

    /// Request parameter outside its accepted range
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Uploaded file could not be decoded as an image
    ImageLoad {
        /// Path to the uploaded file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Uploaded file exceeds the accepted size
    UploadTooLarge {
        /// Path to the uploaded file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPatternType => {
                write!(f, "Pattern type required: select a pattern type to generate")
            }
            Self::UnknownPatternType { tag } => {
                write!(
                    f,
                    "Unknown pattern type '{tag}' (expected traditional, geometric, floral, festival or modern)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Invalid image file '{}': {source}", path.display())
            }
            Self::UploadTooLarge { path, size, limit } => {
                write!(
                    f,
                    "File too large: '{}' is {size} bytes (limit {limit} bytes)",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for kolamgen results
pub type Result<T> = std::result::Result<T, KolamError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> KolamError {
    KolamError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
