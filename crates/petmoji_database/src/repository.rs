//! Repository for generation records.

use crate::{DatabaseResult, EmojiGenerationRow, NewEmojiGenerationRow};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use petmoji_core::{GenerationRecord, GenerationStats, GenerationStatus, NewGenerationRecord, Style};
use petmoji_error::{DatabaseError, DatabaseErrorKind};
use uuid::Uuid;

/// Filters and pagination for the public gallery listing.
///
/// `is_public = true` is always applied on top of these; private rows are
/// unreachable through the repository's listing path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationFilter {
    /// Optional equality filter on style
    pub style: Option<Style>,
    /// Optional equality filter on the featured flag
    pub featured: Option<bool>,
    /// 1-based page number
    pub page: i64,
    /// Page size
    pub limit: i64,
}

/// One page of gallery results plus pagination math.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPage {
    /// Records on this page, newest first
    pub data: Vec<GenerationRecord>,
    /// Echoed page number
    pub page: i64,
    /// Echoed page size
    pub limit: i64,
    /// Total matching records
    pub total: i64,
    /// ceil(total / limit)
    pub total_pages: i64,
}

/// ceil(total / limit) without floating point.
pub(crate) fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 { 0 } else { (total + limit - 1) / limit }
}

/// Repository trait for generation record operations.
///
/// Records are insert-only; there are no update or delete operations.
pub trait GenerationRepository {
    /// Insert a terminal generation record.
    ///
    /// # Errors
    /// Returns DatabaseError if the insert fails.
    fn insert(&mut self, record: NewGenerationRecord) -> DatabaseResult<GenerationRecord>;

    /// Creation time of the most recent record with completed status.
    ///
    /// This is the rate limiter's probe; it intentionally reads a single
    /// timestamp, not a whole row.
    fn latest_completed_at(&mut self) -> DatabaseResult<Option<DateTime<Utc>>>;

    /// Paginated public listing, newest first.
    fn list(&mut self, filter: GenerationFilter) -> DatabaseResult<GenerationPage>;

    /// Fetch a single public record by id.
    ///
    /// Private records are invisible here too; a private id behaves exactly
    /// like an unknown one.
    fn get_public(&mut self, id: Uuid) -> DatabaseResult<Option<GenerationRecord>>;

    /// Aggregate style/status counts over all public records.
    fn stats(&mut self) -> DatabaseResult<GenerationStats>;
}

/// PostgreSQL implementation of GenerationRepository.
///
/// Uses a mutable reference to PgConnection. For concurrent access, wrap a
/// connection pool in [`PgGenerationStore`](crate::PgGenerationStore) instead.
pub struct PostgresGenerationRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresGenerationRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

impl<'a> GenerationRepository for PostgresGenerationRepository<'a> {
    fn insert(&mut self, record: NewGenerationRecord) -> DatabaseResult<GenerationRecord> {
        use crate::schema::emoji_generations;

        let row: EmojiGenerationRow = diesel::insert_into(emoji_generations::table)
            .values(&NewEmojiGenerationRow::from(record))
            .get_result(self.conn)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;
        row.try_into()
    }

    fn latest_completed_at(&mut self) -> DatabaseResult<Option<DateTime<Utc>>> {
        use crate::schema::emoji_generations::dsl;

        dsl::emoji_generations
            .filter(dsl::status.eq(GenerationStatus::Completed.as_str()))
            .order(dsl::created_at.desc())
            .select(dsl::created_at)
            .first(self.conn)
            .optional()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))
    }

    fn list(&mut self, filter: GenerationFilter) -> DatabaseResult<GenerationPage> {
        use crate::schema::emoji_generations::dsl;

        // Boxed queries cannot be reused, so the filter set is applied twice:
        // once for the page of rows, once for the total count.
        let mut query = dsl::emoji_generations
            .filter(dsl::is_public.eq(true))
            .into_boxed();
        let mut count_query = dsl::emoji_generations
            .filter(dsl::is_public.eq(true))
            .into_boxed();

        if let Some(style) = filter.style {
            query = query.filter(dsl::style.eq(style.as_str()));
            count_query = count_query.filter(dsl::style.eq(style.as_str()));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(dsl::featured.eq(featured));
            count_query = count_query.filter(dsl::featured.eq(featured));
        }

        let total: i64 = count_query
            .count()
            .get_result(self.conn)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

        let rows: Vec<EmojiGenerationRow> = query
            .order(dsl::created_at.desc())
            .offset((filter.page - 1) * filter.limit)
            .limit(filter.limit)
            .load(self.conn)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

        let data = rows
            .into_iter()
            .map(GenerationRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GenerationPage {
            data,
            page: filter.page,
            limit: filter.limit,
            total,
            total_pages: total_pages(total, filter.limit),
        })
    }

    fn get_public(&mut self, id: Uuid) -> DatabaseResult<Option<GenerationRecord>> {
        use crate::schema::emoji_generations::dsl;

        let row: Option<EmojiGenerationRow> = dsl::emoji_generations
            .filter(dsl::id.eq(id))
            .filter(dsl::is_public.eq(true))
            .first(self.conn)
            .optional()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;
        row.map(GenerationRecord::try_from).transpose()
    }

    fn stats(&mut self) -> DatabaseResult<GenerationStats> {
        use crate::schema::emoji_generations::dsl;

        let pairs: Vec<(String, String)> = dsl::emoji_generations
            .filter(dsl::is_public.eq(true))
            .select((dsl::style, dsl::status))
            .load(self.conn)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

        let parsed = pairs
            .into_iter()
            .map(|(style, status)| {
                let style: Style = style
                    .parse()
                    .map_err(|e: String| DatabaseError::new(DatabaseErrorKind::Decode(e)))?;
                let status: GenerationStatus = status
                    .parse()
                    .map_err(|e: String| DatabaseError::new(DatabaseErrorKind::Decode(e)))?;
                Ok((style, status))
            })
            .collect::<DatabaseResult<Vec<_>>>()?;

        Ok(GenerationStats::tally(parsed))
    }
}
