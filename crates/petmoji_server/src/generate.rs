//! Generation orchestrator endpoint.
//!
//! `POST /generate` runs the full pipeline: validate, call the provider,
//! re-home the artifact in object storage, record the result, respond. With
//! `?test=true` the provider and storage are skipped entirely and a canned
//! artifact is returned, so clients can exercise the whole flow without
//! spending tokens.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use petmoji_core::{prompt, EmojiArtifact, GenerationStatus, NewGenerationRecord, Style, Usage};
use petmoji_error::{StorageError, StorageErrorKind};
use petmoji_models::DOUBAO_MODEL;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;
use tracing::{error, info, instrument};

/// Stable artifact URL returned by mock-mode responses.
const MOCK_ARTIFACT_URL: &str =
    "https://pub-a51a2574d6e74ec8b4c2cc453bfecf10.r2.dev/emoji-packs/emoji_pack_cute_1758082762296.jpeg";

/// Dimensions reported when the provider omits the output size.
const DEFAULT_IMAGE_SIZE: &str = "2048x2048";

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Base64-encoded pet photo
    #[serde(default)]
    pub image: Option<String>,
    /// Requested expression style
    #[serde(default)]
    pub style: Option<String>,
    /// Optional free-text pet label
    #[serde(default, rename = "petType")]
    pub pet_type: Option<String>,
}

/// Query string for `POST /generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateQuery {
    /// Mock mode switch; only the literal string "true" activates it
    #[serde(default)]
    pub test: Option<String>,
}

/// Successful generation response.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// Always true on this path
    pub success: bool,
    /// Generated artifacts; a single grid today
    pub emojis: Vec<EmojiArtifact>,
    /// Provider usage accounting
    pub usage: Usage,
    /// Model that produced (or pretended to produce) the artifact
    pub model: String,
}

/// `POST /generate` handler.
#[instrument(skip_all, fields(test = query.test.as_deref().unwrap_or("false")))]
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let (image, style_raw) = match (&body.image, &body.style) {
        (Some(image), Some(style)) if !image.is_empty() && !style.is_empty() => {
            (image.clone(), style.clone())
        }
        _ => {
            return Err(ApiError::bad_request(
                "Missing required parameters: image and style",
            ))
        }
    };
    // Unknown styles are rejected outright rather than silently mapped to a
    // default; a typo must not produce a pack in the wrong style.
    let style =
        Style::from_str(&style_raw).map_err(|_| ApiError::bad_request("Invalid style parameter"))?;

    if query.test.as_deref() == Some("true") {
        return Ok(Json(mock_generate(&state, style, body.pet_type).await));
    }

    let generator = state
        .generator
        .as_ref()
        .ok_or_else(|| ApiError::internal("API key not configured"))?;

    let full_prompt = prompt::build_prompt(style, body.pet_type.as_deref());
    let response = generator
        .generate(&full_prompt, &image)
        .await
        .map_err(ApiError::from_provider)?;

    let generated = response.primary_image().map_err(ApiError::from_provider)?;
    let bytes = match generated.inline_bytes() {
        Some(decoded) => decoded.map_err(ApiError::from_provider)?,
        None => {
            let url = generated
                .url()
                .as_deref()
                .ok_or_else(|| ApiError::internal("Invalid response from AI model"))?;
            download_artifact(&state, url)
                .await
                .map_err(ApiError::from_storage)?
        }
    };

    let storage = state.storage.as_ref().ok_or_else(|| {
        error!("Cloudflare R2 credentials not configured");
        ApiError::internal("Cloudflare R2 credentials not configured")
    })?;

    let unix_millis = Utc::now().timestamp_millis();
    let key = format!("emoji-packs/emoji_pack_{}_{}.jpeg", style, unix_millis);
    let public_url = storage
        .put_object(&key, &bytes, "image/jpeg")
        .await
        .map_err(ApiError::from_storage)?;

    let size = generated
        .size()
        .clone()
        .unwrap_or_else(|| DEFAULT_IMAGE_SIZE.to_string());
    let artifact = EmojiArtifact::grid(style, public_url, size, unix_millis);
    let usage = Usage {
        generated_images: *response.usage().generated_images(),
        output_tokens: *response.usage().output_tokens(),
        total_tokens: *response.usage().total_tokens(),
    };
    info!(
        model = %response.model(),
        request_id = %response.id(),
        total_tokens = usage.total_tokens,
        "Generation complete"
    );

    let record = NewGenerationRecord {
        style,
        pet_type: body.pet_type,
        image_url: artifact.url.clone(),
        image_size: Some(artifact.size.clone()),
        provider_model: Some(response.model().clone()),
        provider_request_id: Some(response.id().clone()),
        generated_images: Some(usage.generated_images as i32),
        tokens_used: Some(usage.total_tokens as i32),
        status: GenerationStatus::Completed,
        is_public: true,
        featured: false,
    };
    record_generation(&state, record).await;

    Ok(Json(GenerateResponse {
        success: true,
        emojis: vec![artifact],
        usage,
        model: response.model().clone(),
    }))
}

/// Mock-mode response: canned artifact, realistic usage shape, zero-cost
/// audit row.
async fn mock_generate(
    state: &AppState,
    style: Style,
    pet_type: Option<String>,
) -> GenerateResponse {
    info!("Test mode activated, returning mock data");
    let unix_millis = Utc::now().timestamp_millis();
    let artifact = EmojiArtifact::grid(
        style,
        MOCK_ARTIFACT_URL.to_string(),
        DEFAULT_IMAGE_SIZE.to_string(),
        unix_millis,
    );
    let usage = Usage::mock();

    let record = NewGenerationRecord {
        style,
        pet_type,
        image_url: artifact.url.clone(),
        image_size: Some(artifact.size.clone()),
        provider_model: Some(DOUBAO_MODEL.to_string()),
        provider_request_id: Some(format!("test_{}", unix_millis)),
        generated_images: Some(usage.generated_images as i32),
        // Mock mode spends nothing, whatever the reported shape says
        tokens_used: Some(0),
        status: GenerationStatus::Completed,
        is_public: true,
        featured: false,
    };
    record_generation(state, record).await;

    GenerateResponse {
        success: true,
        emojis: vec![artifact],
        usage,
        model: DOUBAO_MODEL.to_string(),
    }
}

/// Best-effort audit insert. The artifact is already uploaded and the client
/// response is final, so a write failure is logged and swallowed.
async fn record_generation(state: &AppState, record: NewGenerationRecord) {
    if let Err(e) = state.store.insert(record).await {
        error!(error = %e, "Error saving generation record to database");
    }
}

/// Fetch the provider-hosted artifact so it can be re-homed in storage.
async fn download_artifact(state: &AppState, url: &str) -> Result<Vec<u8>, StorageError> {
    let response = state
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| StorageError::new(StorageErrorKind::Download(e.to_string())))?;
    if !response.status().is_success() {
        return Err(StorageError::new(StorageErrorKind::Download(format!(
            "Failed to fetch image: {}",
            response.status().as_u16()
        ))));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| StorageError::new(StorageErrorKind::Download(e.to_string())))?;
    Ok(bytes.to_vec())
}

/// `GET /generate` health probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "model": DOUBAO_MODEL,
    }))
}
