//! Image proxy endpoint.
//!
//! Serves artifact images from the storage and provider hosts through the
//! API origin, so gallery pages avoid cross-origin fetches against the
//! bucket. The proxy is deliberately not open: only known artifact hosts may
//! be fetched.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Hosts the proxy will fetch from verbatim.
const ALLOWED_HOSTS: [&str; 3] = [
    "pub-a51a2574d6e74ec8b4c2cc453bfecf10.r2.dev",
    "ark-content-generation-v2-cn-beijing.tos-cn-beijing.volces.com",
    "5c4526fa64900b23d9572f57b126ea45.r2.cloudflarestorage.com",
];

/// Host suffixes covering every R2 public and storage endpoint.
const ALLOWED_SUFFIXES: [&str; 2] = [".r2.dev", ".r2.cloudflarestorage.com"];

/// Query string for `GET /image-proxy`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyQuery {
    /// Absolute URL of the image to fetch
    #[serde(default)]
    pub url: Option<String>,
}

/// Whether the proxy may fetch from this host.
pub fn is_allowed_host(host: &str) -> bool {
    ALLOWED_HOSTS.contains(&host) || ALLOWED_SUFFIXES.iter().any(|s| host.ends_with(s))
}

/// `GET /image-proxy` handler.
#[instrument(skip(state))]
pub async fn image_proxy(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<Response, ApiError> {
    let raw = query
        .url
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Missing url parameter"))?;
    let url = Url::parse(raw).map_err(|_| ApiError::bad_request("Invalid URL format"))?;
    let host = url
        .host_str()
        .ok_or_else(|| ApiError::bad_request("Invalid URL format"))?;

    if !is_allowed_host(host) {
        warn!(host, "Rejected proxy request for disallowed host");
        return Err(ApiError::forbidden(format!("Domain not allowed: {}", host)));
    }

    debug!(%url, "Fetching proxied image");
    let upstream = state
        .http
        .get(url)
        .header(header::USER_AGENT, "Pet-Emoji-Generator/1.0")
        .header(header::ACCEPT, "image/*")
        .send()
        .await
        .map_err(|e| ApiError::internal(format!("Internal server error: {}", e)))?;

    if !upstream.status().is_success() {
        let status = upstream.status();
        return Err(ApiError::with_status(
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            format!("Failed to fetch image: {}", status.as_u16()),
        ));
    }

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/jpeg")
        .to_string();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ApiError::internal(format!("Internal server error: {}", e)))?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_str(&content_type)
                .unwrap_or_else(|_| HeaderValue::from_static("image/jpeg")),
        ),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
    ];
    Ok((headers, bytes).into_response())
}
