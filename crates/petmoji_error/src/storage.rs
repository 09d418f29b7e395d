//! Object storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Storage credentials are missing or incomplete
    #[display("Storage credentials not configured: {}", _0)]
    MissingCredentials(String),
    /// Invalid storage configuration
    #[display("Invalid storage configuration: {}", _0)]
    InvalidConfig(String),
    /// Failed to download the source artifact before upload
    #[display("Failed to fetch artifact: {}", _0)]
    Download(String),
    /// Upload request could not be sent
    #[display("Upload request failed: {}", _0)]
    Request(String),
    /// Upload was rejected by the storage service
    #[display("Upload rejected with HTTP {}: {}", status_code, message)]
    Rejected {
        /// HTTP status returned by the storage service
        status_code: u16,
        /// Response body or status text
        message: String,
    },
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use petmoji_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Download("HTTP 502".to_string()));
/// assert!(format!("{}", err).contains("fetch artifact"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
