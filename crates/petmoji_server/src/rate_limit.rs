//! Rate limit status endpoint.

use crate::state::{AppState, StoreRateLimitSource};
use axum::extract::State;
use axum::Json;
use petmoji_rate_limit::RateLimitStatus;
use serde::Serialize;
use tracing::instrument;

/// Response body for `GET /rate-limit-status`.
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitResponse {
    /// Always true; a source failure fails open instead of erroring
    pub success: bool,
    /// The window evaluation
    pub data: RateLimitStatus,
}

/// `GET /rate-limit-status` handler.
///
/// Always answers 200. The limiter itself maps store failures to the
/// permissive status, so there is no error branch here.
#[instrument(skip_all)]
pub async fn rate_limit_status(State(state): State<AppState>) -> Json<RateLimitResponse> {
    let source = StoreRateLimitSource::new(state.store.clone());
    let data = state.limiter.check(&source).await;
    Json(RateLimitResponse {
        success: true,
        data,
    })
}
