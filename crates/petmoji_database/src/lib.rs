//! PostgreSQL integration for petmoji.
//!
//! This crate is the persistence gateway over the single `emoji_generations`
//! table: Diesel schema and row types, a synchronous repository over
//! `&mut PgConnection`, and an async [`GenerationStore`] facade backed by an
//! r2d2 pool for use from request handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use petmoji_database::{PgGenerationStore, GenerationStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PgGenerationStore::from_env()?;
//! let latest = store.latest_completed_at().await?;
//! # Ok(())
//! # }
//! ```

mod connection;
mod models;
mod repository;
pub mod schema;
mod store;

pub use connection::{establish_connection, establish_pool, run_migrations, PgPool};
pub use models::{EmojiGenerationRow, NewEmojiGenerationRow};
pub use repository::{
    GenerationFilter, GenerationPage, GenerationRepository, PostgresGenerationRepository,
};
pub use store::{GenerationStore, PgGenerationStore};

use petmoji_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
