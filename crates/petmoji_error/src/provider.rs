//! Image generation provider error types.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key not found in environment
    #[display("DOUBAO_API_KEY environment variable not set")]
    MissingApiKey,
    /// Request could not be sent
    #[display("Provider request failed: {}", _0)]
    Request(String),
    /// HTTP error with status code and message
    #[display("Provider HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be parsed
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
    /// Success payload carried no image data
    #[display("Provider response contained no image data")]
    EmptyResponse,
    /// Base64 decoding of inline image data failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use petmoji_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("DOUBAO_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Upstream HTTP status carried by this error, if any.
    ///
    /// Used by the orchestrator to propagate the provider's own status code
    /// to the client instead of a generic 500.
    pub fn upstream_status(&self) -> Option<u16> {
        match &self.kind {
            ProviderErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
