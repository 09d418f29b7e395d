//! Generation endpoint behavior: validation, mock mode, the full provider
//! pipeline, and the best-effort audit write.

mod test_utils;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use petmoji_core::{Style, Usage};
use petmoji_error::{ProviderError, ProviderErrorKind};
use petmoji_server::generate::{generate, GenerateQuery, GenerateRequest};
use std::sync::Arc;
use test_utils::{
    empty_response, inline_response, state_with, InMemoryStore, MockGenerator, MockStorage,
};

fn body(image: &str, style: Option<&str>) -> GenerateRequest {
    GenerateRequest {
        image: Some(image.to_string()),
        style: style.map(str::to_string),
        pet_type: None,
    }
}

fn test_mode() -> GenerateQuery {
    GenerateQuery {
        test: Some("true".to_string()),
    }
}

#[tokio::test]
async fn mock_mode_serves_canned_artifact_for_every_style() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let state = state_with(store.clone(), None, None);

    for style in ["cute", "funny", "angry", "happy"] {
        let Json(response) = generate(
            State(state.clone()),
            Query(test_mode()),
            Json(body("cGhvdG8=", Some(style))),
        )
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

        assert!(response.success);
        assert_eq!(response.emojis.len(), 1);
        assert_eq!(response.emojis[0].kind, "grid");
        assert_eq!(response.emojis[0].style.as_str(), style);
        assert!(response.emojis[0].url.ends_with(".jpeg"));
        assert_eq!(response.usage, Usage::mock());
        assert_eq!(response.model, "doubao-seedream-4-0-250828");
    }

    let records = store.records();
    assert_eq!(records.len(), 4);
    for record in &records {
        // Mock mode audits the row but never spends tokens
        assert_eq!(record.tokens_used, Some(0));
        assert!(
            record
                .provider_request_id
                .as_deref()
                .is_some_and(|id| id.starts_with("test_"))
        );
        assert!(record.is_public);
    }
    Ok(())
}

#[tokio::test]
async fn missing_parameters_are_rejected_before_any_work() {
    let store = Arc::new(InMemoryStore::new());
    let state = state_with(store.clone(), None, None);

    let err = generate(
        State(state.clone()),
        Query(test_mode()),
        Json(GenerateRequest {
            image: None,
            style: Some("cute".to_string()),
            pet_type: None,
        }),
    )
    .await
    .expect_err("missing image must be rejected");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Missing required parameters: image and style");

    let err = generate(
        State(state),
        Query(test_mode()),
        Json(body("", Some("cute"))),
    )
    .await
    .expect_err("empty image must be rejected");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn unknown_style_is_rejected_not_defaulted() {
    let store = Arc::new(InMemoryStore::new());
    let state = state_with(store.clone(), None, None);

    let err = generate(
        State(state),
        Query(test_mode()),
        Json(body("cGhvdG8=", Some("spooky"))),
    )
    .await
    .expect_err("unknown style must be rejected");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Invalid style parameter");
    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn inline_image_is_uploaded_and_recorded() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let generator = Arc::new(MockGenerator::returning(Ok(inline_response("aGVsbG8="))));
    let storage = Arc::new(MockStorage::new());
    let state = state_with(store.clone(), Some(generator), Some(storage.clone()));

    let Json(response) = generate(
        State(state),
        Query(GenerateQuery::default()),
        Json(body("cGhvdG8=", Some("funny"))),
    )
    .await
    .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    assert!(response.success);
    let artifact = &response.emojis[0];
    assert!(artifact.url.starts_with("https://cdn.test/emoji-packs/emoji_pack_funny_"));
    assert_eq!(artifact.size, "2048x2048");
    assert_eq!(response.usage.total_tokens, 16384);

    let puts = storage.puts();
    assert_eq!(puts.len(), 1);
    assert!(puts[0].0.starts_with("emoji-packs/emoji_pack_funny_"));
    assert_eq!(puts[0].1, "image/jpeg");

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].style, Style::Funny);
    assert_eq!(records[0].tokens_used, Some(16384));
    assert_eq!(records[0].provider_request_id.as_deref(), Some("req_inline"));
    assert_eq!(records[0].image_url, artifact.url);
    Ok(())
}

#[tokio::test]
async fn provider_http_error_propagates_upstream_status() {
    let store = Arc::new(InMemoryStore::new());
    let generator = Arc::new(MockGenerator::returning(Err(ProviderError::new(
        ProviderErrorKind::HttpError {
            status_code: 402,
            message: "quota exhausted".to_string(),
        },
    ))));
    let storage = Arc::new(MockStorage::new());
    let state = state_with(store.clone(), Some(generator), Some(storage.clone()));

    let err = generate(
        State(state),
        Query(GenerateQuery::default()),
        Json(body("cGhvdG8=", Some("cute"))),
    )
    .await
    .expect_err("provider failure must fail the request");
    assert_eq!(err.status(), StatusCode::PAYMENT_REQUIRED);
    assert_eq!(err.message(), "API request failed: 402");
    assert!(storage.puts().is_empty());
    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn empty_provider_payload_is_an_invalid_response() {
    let store = Arc::new(InMemoryStore::new());
    let generator = Arc::new(MockGenerator::returning(Ok(empty_response())));
    let storage = Arc::new(MockStorage::new());
    let state = state_with(store.clone(), Some(generator), Some(storage));

    let err = generate(
        State(state),
        Query(GenerateQuery::default()),
        Json(body("cGhvdG8=", Some("cute"))),
    )
    .await
    .expect_err("empty payload must fail the request");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "Invalid response from AI model");
    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn upload_failure_fails_the_request_without_a_record() {
    let store = Arc::new(InMemoryStore::new());
    let generator = Arc::new(MockGenerator::returning(Ok(inline_response("aGVsbG8="))));
    let storage = Arc::new(MockStorage::failing());
    let state = state_with(store.clone(), Some(generator), Some(storage));

    let err = generate(
        State(state),
        Query(GenerateQuery::default()),
        Json(body("cGhvdG8=", Some("cute"))),
    )
    .await
    .expect_err("upload failure must fail the request");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.message().starts_with("R2 upload failed"));
    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn audit_write_failure_does_not_affect_the_response() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::failing_writes());
    let state = state_with(store.clone(), None, None);

    let Json(response) = generate(
        State(state),
        Query(test_mode()),
        Json(body("cGhvdG8=", Some("happy"))),
    )
    .await
    .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    assert!(response.success);
    assert_eq!(store.insert_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn missing_generator_reports_unconfigured_api_key() {
    let store = Arc::new(InMemoryStore::new());
    let state = state_with(store, None, Some(Arc::new(MockStorage::new())));

    let err = generate(
        State(state),
        Query(GenerateQuery::default()),
        Json(body("cGhvdG8=", Some("cute"))),
    )
    .await
    .expect_err("real mode without a provider must fail");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "API key not configured");
}
