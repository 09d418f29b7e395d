//! Public gallery endpoints.
//!
//! Read-only views over the generation records: a paginated listing with
//! optional style/featured filters, an aggregate stats view, and single
//! record lookup by id. Only rows flagged public are ever visible here.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use petmoji_core::{GenerationRecord, GenerationStats, Style};
use petmoji_database::GenerationFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{error, instrument};
use uuid::Uuid;

/// Smallest accepted page size.
const MIN_LIMIT: i64 = 1;
/// Largest accepted page size.
const MAX_LIMIT: i64 = 50;
/// Page size applied when the client sends none.
const DEFAULT_LIMIT: i64 = 8;

static UUID_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
    )
    .unwrap_or_else(|e| unreachable!("invalid UUID pattern: {e}"))
});

/// Query string for `GET /generations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// One-based page number, default 1
    #[serde(default)]
    pub page: Option<i64>,
    /// Page size, default 8, max 50
    #[serde(default)]
    pub limit: Option<i64>,
    /// Optional style filter
    #[serde(default)]
    pub style: Option<String>,
    /// Featured filter; only the literal "true" narrows the listing
    #[serde(default)]
    pub featured: Option<String>,
    /// Stats switch; "true" returns aggregates instead of a page
    #[serde(default)]
    pub stats: Option<String>,
}

/// Pagination envelope in listing responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Echoed page number
    pub page: i64,
    /// Echoed page size
    pub limit: i64,
    /// Total matching records
    pub total: i64,
    /// Total pages at this page size
    pub total_pages: i64,
    /// Whether a later page exists
    pub has_next: bool,
    /// Whether an earlier page exists
    pub has_prev: bool,
}

/// Listing response body.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// Always true on this path
    pub success: bool,
    /// Records on this page, newest first
    pub data: Vec<GenerationRecord>,
    /// Pagination metadata
    pub pagination: Pagination,
}

/// Stats response body.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Always true on this path
    pub success: bool,
    /// Aggregate counts over public records
    pub stats: GenerationStats,
}

/// Single record response body.
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    /// Always true on this path
    pub success: bool,
    /// The requested record
    pub data: GenerationRecord,
}

/// Either shape `GET /generations` can produce.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GalleryResponse {
    /// Aggregates, when `stats=true`
    Stats(StatsResponse),
    /// A record page otherwise
    Page(Box<ListResponse>),
}

/// `GET /generations` handler.
#[instrument(skip_all)]
pub async fn list_generations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<GalleryResponse>, ApiError> {
    // Stats short-circuits before pagination validation, so a stats request
    // with junk page numbers still succeeds.
    if query.stats.as_deref() == Some("true") {
        let stats = state.store.stats().await.map_err(|e| {
            error!(error = %e, "Error fetching generation stats");
            ApiError::internal("Internal server error")
        })?;
        return Ok(Json(GalleryResponse::Stats(StatsResponse {
            success: true,
            stats,
        })));
    }

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if page < 1 || !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::bad_request("Invalid page or limit parameters"));
    }

    let style = match &query.style {
        Some(raw) => Some(
            Style::from_str(raw).map_err(|_| ApiError::bad_request("Invalid style parameter"))?,
        ),
        None => None,
    };
    // Anything other than the literal "true" leaves the listing unfiltered;
    // there is no way to ask for only non-featured records.
    let featured = (query.featured.as_deref() == Some("true")).then_some(true);

    let result = state
        .store
        .list(GenerationFilter {
            style,
            featured,
            page,
            limit,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching emoji generations");
            ApiError::internal("Internal server error")
        })?;

    Ok(Json(GalleryResponse::Page(Box::new(ListResponse {
        success: true,
        data: result.data,
        pagination: Pagination {
            page: result.page,
            limit: result.limit,
            total: result.total,
            total_pages: result.total_pages,
            has_next: result.page < result.total_pages,
            has_prev: result.page > 1,
        },
    }))))
}

/// `HEAD /generations` health probe.
pub async fn head_generations() -> Response {
    (StatusCode::OK, [(header::CACHE_CONTROL, "no-cache")]).into_response()
}

/// `GET /generations/:id` handler.
#[instrument(skip(state))]
pub async fn get_generation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    if !UUID_RE.is_match(&id) {
        return Err(ApiError::bad_request("Invalid ID format"));
    }
    let id = Uuid::from_str(&id).map_err(|_| ApiError::bad_request("Invalid ID format"))?;

    let record = state
        .store
        .get_public(id)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching emoji generation");
            ApiError::internal("Internal server error")
        })?
        .ok_or_else(|| ApiError::not_found("Generation record not found"))?;

    Ok(Json(RecordResponse {
        success: true,
        data: record,
    }))
}
