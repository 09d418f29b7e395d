//! Gallery endpoint behavior: pagination, filters, visibility, stats, and
//! id validation.

mod test_utils;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petmoji_core::Style;
use petmoji_server::gallery::{get_generation, list_generations, GalleryResponse, ListQuery};
use std::sync::Arc;
use test_utils::{private_record, record, state_with, InMemoryStore};
use uuid::Uuid;

fn page_query(page: i64, limit: i64) -> ListQuery {
    ListQuery {
        page: Some(page),
        limit: Some(limit),
        ..ListQuery::default()
    }
}

#[tokio::test]
async fn empty_listing_uses_default_pagination() -> anyhow::Result<()> {
    let state = state_with(Arc::new(InMemoryStore::new()), None, None);

    let Json(response) = list_generations(State(state), Query(ListQuery::default()))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    let GalleryResponse::Page(page) = response else {
        anyhow::bail!("expected a record page");
    };
    assert!(page.success);
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 8);
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.total_pages, 0);
    assert!(!page.pagination.has_next);
    assert!(!page.pagination.has_prev);
    Ok(())
}

#[tokio::test]
async fn out_of_range_pagination_is_rejected() {
    let state = state_with(Arc::new(InMemoryStore::new()), None, None);

    for (page, limit) in [(0, 8), (1, 0), (1, 51), (-3, 8)] {
        let err = list_generations(State(state.clone()), Query(page_query(page, limit)))
            .await
            .expect_err("out-of-range pagination must be rejected");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid page or limit parameters");
    }
}

#[tokio::test]
async fn style_filter_narrows_and_invalid_style_rejects() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_records(vec![
        record(Style::Cute, 10),
        record(Style::Funny, 20),
        record(Style::Cute, 30),
    ]));
    let state = state_with(store, None, None);

    let query = ListQuery {
        style: Some("cute".to_string()),
        ..ListQuery::default()
    };
    let Json(response) = list_generations(State(state.clone()), Query(query))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    let GalleryResponse::Page(page) = response else {
        anyhow::bail!("expected a record page");
    };
    assert_eq!(page.pagination.total, 2);
    assert!(page.data.iter().all(|r| r.style == Style::Cute));

    let query = ListQuery {
        style: Some("spooky".to_string()),
        ..ListQuery::default()
    };
    let err = list_generations(State(state), Query(query))
        .await
        .expect_err("unknown style must be rejected");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Invalid style parameter");
    Ok(())
}

#[tokio::test]
async fn pagination_walks_newest_first() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_records(vec![
        record(Style::Cute, 30),
        record(Style::Funny, 10),
        record(Style::Happy, 20),
    ]));
    let state = state_with(store, None, None);

    let Json(response) = list_generations(State(state.clone()), Query(page_query(1, 2)))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    let GalleryResponse::Page(page) = response else {
        anyhow::bail!("expected a record page");
    };
    assert_eq!(page.data.len(), 2);
    // Newest (10 minutes old) first
    assert_eq!(page.data[0].style, Style::Funny);
    assert_eq!(page.data[1].style, Style::Happy);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page.pagination.has_next);
    assert!(!page.pagination.has_prev);

    let Json(response) = list_generations(State(state), Query(page_query(2, 2)))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    let GalleryResponse::Page(page) = response else {
        anyhow::bail!("expected a record page");
    };
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].style, Style::Cute);
    assert!(!page.pagination.has_next);
    assert!(page.pagination.has_prev);
    Ok(())
}

#[tokio::test]
async fn private_records_are_invisible_everywhere() -> anyhow::Result<()> {
    let hidden = private_record(Style::Angry, 5);
    let hidden_id = hidden.id;
    let store = Arc::new(InMemoryStore::with_records(vec![
        record(Style::Cute, 10),
        hidden,
    ]));
    let state = state_with(store, None, None);

    let Json(response) = list_generations(State(state.clone()), Query(ListQuery::default()))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    let GalleryResponse::Page(page) = response else {
        anyhow::bail!("expected a record page");
    };
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.data[0].style, Style::Cute);

    let err = get_generation(State(state.clone()), Path(hidden_id.to_string()))
        .await
        .expect_err("a private id must look unknown");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let query = ListQuery {
        stats: Some("true".to_string()),
        ..ListQuery::default()
    };
    let Json(response) = list_generations(State(state), Query(query))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    let GalleryResponse::Stats(stats) = response else {
        anyhow::bail!("expected stats");
    };
    assert_eq!(stats.stats.total, 1);
    assert_eq!(stats.stats.by_style.angry, 0);
    Ok(())
}

#[tokio::test]
async fn stats_mode_ignores_pagination_junk() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_records(vec![
        record(Style::Cute, 10),
        record(Style::Happy, 20),
    ]));
    let state = state_with(store, None, None);

    // Stats short-circuits before the page/limit check
    let query = ListQuery {
        page: Some(0),
        limit: Some(999),
        stats: Some("true".to_string()),
        ..ListQuery::default()
    };
    let Json(response) = list_generations(State(state), Query(query))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    let GalleryResponse::Stats(stats) = response else {
        anyhow::bail!("expected stats");
    };
    assert!(stats.success);
    assert_eq!(stats.stats.total, 2);
    assert_eq!(stats.stats.completed, 2);
    assert_eq!(stats.stats.by_style.cute, 1);
    assert_eq!(stats.stats.by_style.happy, 1);
    Ok(())
}

#[tokio::test]
async fn record_lookup_validates_the_id_shape() {
    let state = state_with(Arc::new(InMemoryStore::new()), None, None);

    let err = get_generation(State(state.clone()), Path("not-a-uuid".to_string()))
        .await
        .expect_err("malformed id must be rejected");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Invalid ID format");

    let err = get_generation(State(state), Path(Uuid::new_v4().to_string()))
        .await
        .expect_err("unknown id must be a 404");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.message(), "Generation record not found");
}

#[tokio::test]
async fn record_lookup_returns_the_stored_row() -> anyhow::Result<()> {
    let stored = record(Style::Funny, 15);
    let id = stored.id;
    let store = Arc::new(InMemoryStore::with_records(vec![stored]));
    let state = state_with(store, None, None);

    let Json(response) = get_generation(State(state), Path(id.to_string()))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
    assert!(response.success);
    assert_eq!(response.data.id, id);
    assert_eq!(response.data.style, Style::Funny);
    Ok(())
}
