//! Error types for the petmoji workspace.
//!
//! This crate provides the foundation error types used throughout petmoji.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use petmoji_error::{PetmojiResult, ConfigError};
//!
//! fn load_credential() -> PetmojiResult<String> {
//!     Err(ConfigError::new("DOUBAO_API_KEY not set"))?
//! }
//!
//! match load_credential() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod provider;
mod storage;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{PetmojiError, PetmojiErrorKind, PetmojiResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use storage::{StorageError, StorageErrorKind};
