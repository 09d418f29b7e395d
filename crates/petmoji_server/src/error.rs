//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use petmoji_error::{ProviderError, ProviderErrorKind, StorageError};
use serde_json::json;

/// A request-terminating error, rendered as `{"error": message}` JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 403 Forbidden.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// An error with an explicit upstream status.
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Map a provider failure, propagating the upstream HTTP status when
    /// there is one and flagging malformed success payloads distinctly.
    pub fn from_provider(err: ProviderError) -> Self {
        match &err.kind {
            ProviderErrorKind::HttpError { status_code, .. } => Self::with_status(
                StatusCode::from_u16(*status_code)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                format!("API request failed: {}", status_code),
            ),
            ProviderErrorKind::MissingApiKey => Self::internal("API key not configured"),
            ProviderErrorKind::EmptyResponse
            | ProviderErrorKind::Parse(_)
            | ProviderErrorKind::Base64Decode(_) => {
                Self::internal("Invalid response from AI model")
            }
            ProviderErrorKind::Request(_) => Self::internal("Internal server error"),
        }
    }

    /// Map a storage failure. Upload failure is fatal to the request by
    /// design; the provider URL is never substituted.
    pub fn from_storage(err: StorageError) -> Self {
        Self::internal(format!("R2 upload failed: {}", err.kind))
    }

    /// The HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The client-visible message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
