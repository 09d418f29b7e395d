//! Rate limit status endpoint behavior, including the fail-open path.

mod test_utils;

use axum::extract::State;
use axum::Json;
use petmoji_core::Style;
use petmoji_server::rate_limit::rate_limit_status;
use std::sync::Arc;
use test_utils::{record, state_with, InMemoryStore};

#[tokio::test]
async fn empty_store_allows_generation() {
    let state = state_with(Arc::new(InMemoryStore::new()), None, None);

    let Json(response) = rate_limit_status(State(state)).await;
    assert!(response.success);
    assert!(response.data.can_generate);
    assert!(!response.data.is_limited);
    assert_eq!(response.data.remaining_minutes, 0);
    assert!(response.data.last_generation_time.is_none());
}

#[tokio::test]
async fn recent_completion_limits_with_floored_minutes() {
    let recent = record(Style::Cute, 30);
    let last_time = recent.created_at;
    let store = Arc::new(InMemoryStore::with_records(vec![recent]));
    let state = state_with(store, None, None);

    let Json(response) = rate_limit_status(State(state)).await;
    assert!(response.data.is_limited);
    assert!(!response.data.can_generate);
    assert_eq!(response.data.remaining_minutes, 30);
    assert_eq!(response.data.last_generation_time, Some(last_time));
}

#[tokio::test]
async fn stale_completion_opens_the_window() {
    let store = Arc::new(InMemoryStore::with_records(vec![record(Style::Happy, 90)]));
    let state = state_with(store, None, None);

    let Json(response) = rate_limit_status(State(state)).await;
    assert!(!response.data.is_limited);
    assert!(response.data.can_generate);
    assert_eq!(response.data.remaining_minutes, 0);
    assert!(response.data.last_generation_time.is_some());
}

#[tokio::test]
async fn store_failure_fails_open() {
    let state = state_with(Arc::new(InMemoryStore::failing_reads()), None, None);

    let Json(response) = rate_limit_status(State(state)).await;
    assert!(response.success);
    assert!(response.data.can_generate);
    assert!(!response.data.is_limited);
}

#[tokio::test]
async fn wire_shape_is_camel_case() -> anyhow::Result<()> {
    let state = state_with(Arc::new(InMemoryStore::new()), None, None);

    let Json(response) = rate_limit_status(State(state)).await;
    let value = serde_json::to_value(&response)?;
    let data = &value["data"];
    assert!(data["isLimited"].is_boolean());
    assert!(data["canGenerate"].is_boolean());
    assert!(data["remainingMinutes"].is_number());
    // Absent, not null, when there is no prior record
    assert!(data.get("lastGenerationTime").is_none());
    Ok(())
}
