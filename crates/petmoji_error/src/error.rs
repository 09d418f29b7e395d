//! Top-level error wrapper types.

use crate::{ConfigError, ProviderError, StorageError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum. Each petmoji crate contributes the
/// variant covering its own failure domain.
///
/// # Examples
///
/// ```
/// use petmoji_error::{PetmojiError, ConfigError};
///
/// let cfg_err = ConfigError::new("R2_BUCKET not set");
/// let err: PetmojiError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PetmojiErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Object storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Image generation provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Petmoji error with kind discrimination.
///
/// # Examples
///
/// ```
/// use petmoji_error::{PetmojiResult, ConfigError};
///
/// fn might_fail() -> PetmojiResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Petmoji Error: {}", _0)]
pub struct PetmojiError(Box<PetmojiErrorKind>);

impl PetmojiError {
    /// Create a new error from a kind.
    pub fn new(kind: PetmojiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PetmojiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PetmojiErrorKind
impl<T> From<T> for PetmojiError
where
    T: Into<PetmojiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for petmoji operations.
pub type PetmojiResult<T> = std::result::Result<T, PetmojiError>;
