//! The persisted generation record.

use crate::{GenerationStatus, Style};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted emoji pack generation.
///
/// Records are written exactly once, after the external generation and
/// upload both succeed, and never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Opaque unique identifier, assigned at insert
    pub id: Uuid,
    /// Insert time, immutable
    pub created_at: DateTime<Utc>,
    /// Last modification time; equals `created_at` in practice
    pub updated_at: DateTime<Utc>,
    /// Expression style of the pack
    pub style: Style,
    /// Optional free-text pet label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<String>,
    /// Public URL of the stored artifact
    pub image_url: String,
    /// Pixel dimensions, e.g. "2048x2048"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
    /// Provider model that produced the artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_model: Option<String>,
    /// Provider request identifier, for audit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_request_id: Option<String>,
    /// Number of images produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_images: Option<i32>,
    /// Tokens billed for this generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<i32>,
    /// Terminal status of the attempt
    pub status: GenerationStatus,
    /// Failure description; schema contract only, unset by the writer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Whether the record is visible in the public gallery
    pub is_public: bool,
    /// Whether the record is highlighted in listings
    pub featured: bool,
}

/// Fields supplied when inserting a new generation record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGenerationRecord {
    /// Expression style of the pack
    pub style: Style,
    /// Optional free-text pet label
    pub pet_type: Option<String>,
    /// Public URL of the stored artifact
    pub image_url: String,
    /// Pixel dimensions
    pub image_size: Option<String>,
    /// Provider model that produced the artifact
    pub provider_model: Option<String>,
    /// Provider request identifier
    pub provider_request_id: Option<String>,
    /// Number of images produced
    pub generated_images: Option<i32>,
    /// Tokens billed
    pub tokens_used: Option<i32>,
    /// Terminal status
    pub status: GenerationStatus,
    /// Gallery visibility; true for every orchestrator-written row
    pub is_public: bool,
    /// Listing highlight flag
    pub featured: bool,
}
