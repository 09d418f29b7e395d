//! Object storage for generated emoji pack artifacts.
//!
//! Generated grids are uploaded to an S3-compatible bucket (Cloudflare R2 in
//! production) and served from a public base URL. The provider's own URL for
//! a generated image is not guaranteed durable, so an upload failure fails
//! the whole generation request; there is no fallback to the provider URL.
//!
//! The [`ObjectStorage`] trait keeps the backend pluggable; [`S3Storage`]
//! implements it with a plain HTTP `PUT` signed with AWS Signature V4.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod s3;
mod sigv4;

pub use petmoji_error::{StorageError, StorageErrorKind};
pub use s3::{S3Config, S3Storage};

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for pluggable artifact storage backends.
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store an object under the given key and return its public URL.
    ///
    /// # Arguments
    ///
    /// * `key` - Bucket-relative object key, e.g. `emoji-packs/pack.jpeg`
    /// * `data` - Raw object bytes
    /// * `content_type` - MIME type recorded on the object
    async fn put_object(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> StorageResult<String>;
}
