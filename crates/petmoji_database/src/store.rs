//! Async store facade over the connection pool.

use crate::{
    establish_pool, DatabaseResult, GenerationFilter, GenerationPage, GenerationRepository,
    PgPool, PostgresGenerationRepository,
};
use chrono::{DateTime, Utc};
use petmoji_core::{GenerationRecord, GenerationStats, NewGenerationRecord};
use petmoji_error::{DatabaseError, DatabaseErrorKind};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Async persistence gateway used by the HTTP handlers.
///
/// Implementations must be cheaply cloneable behind an `Arc`; all methods
/// take `&self`.
#[async_trait::async_trait]
pub trait GenerationStore: Send + Sync {
    /// Insert a terminal generation record.
    async fn insert(&self, record: NewGenerationRecord) -> DatabaseResult<GenerationRecord>;

    /// Creation time of the most recent completed record.
    async fn latest_completed_at(&self) -> DatabaseResult<Option<DateTime<Utc>>>;

    /// Paginated public listing, newest first.
    async fn list(&self, filter: GenerationFilter) -> DatabaseResult<GenerationPage>;

    /// Fetch a single public record by id.
    async fn get_public(&self, id: Uuid) -> DatabaseResult<Option<GenerationRecord>>;

    /// Aggregate style/status counts over all public records.
    async fn stats(&self) -> DatabaseResult<GenerationStats>;
}

/// PostgreSQL-backed [`GenerationStore`] over an r2d2 pool.
///
/// Diesel is synchronous, so each call checks a connection out of the pool
/// and runs the query on the blocking thread pool, keeping the async workers
/// free.
#[derive(Clone)]
pub struct PgGenerationStore {
    pool: PgPool,
}

impl PgGenerationStore {
    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store from `DATABASE_URL`.
    pub fn from_env() -> DatabaseResult<Self> {
        Ok(Self::new(establish_pool()?))
    }

    async fn run<T, F>(&self, f: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PostgresGenerationRepository<'_>) -> DatabaseResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;
            let mut repo = PostgresGenerationRepository::new(&mut conn);
            f(&mut repo)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(format!("join error: {}", e))))?
    }
}

#[async_trait::async_trait]
impl GenerationStore for PgGenerationStore {
    #[instrument(skip_all, fields(style = %record.style))]
    async fn insert(&self, record: NewGenerationRecord) -> DatabaseResult<GenerationRecord> {
        let inserted = self.run(move |repo| repo.insert(record)).await?;
        debug!(id = %inserted.id, "Inserted generation record");
        Ok(inserted)
    }

    async fn latest_completed_at(&self) -> DatabaseResult<Option<DateTime<Utc>>> {
        self.run(|repo| repo.latest_completed_at()).await
    }

    #[instrument(skip_all, fields(page = filter.page, limit = filter.limit))]
    async fn list(&self, filter: GenerationFilter) -> DatabaseResult<GenerationPage> {
        self.run(move |repo| repo.list(filter)).await
    }

    async fn get_public(&self, id: Uuid) -> DatabaseResult<Option<GenerationRecord>> {
        self.run(move |repo| repo.get_public(id)).await
    }

    async fn stats(&self) -> DatabaseResult<GenerationStats> {
        self.run(|repo| repo.stats()).await
    }
}
