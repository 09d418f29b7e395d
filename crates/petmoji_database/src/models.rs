//! Diesel models for the emoji_generations table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use petmoji_core::{GenerationRecord, GenerationStatus, NewGenerationRecord, Style};
use petmoji_error::{DatabaseError, DatabaseErrorKind};
use uuid::Uuid;

/// Database row for the emoji_generations table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::emoji_generations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmojiGenerationRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub style: String,
    pub pet_type: Option<String>,
    pub image_url: String,
    pub image_size: Option<String>,
    pub provider_model: Option<String>,
    pub provider_request_id: Option<String>,
    pub generated_images: Option<i32>,
    pub tokens_used: Option<i32>,
    pub status: String,
    pub error_message: Option<String>,
    pub is_public: bool,
    pub featured: bool,
}

/// Insertable struct for the emoji_generations table.
///
/// `id`, `created_at` and `updated_at` are filled by column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::emoji_generations)]
pub struct NewEmojiGenerationRow {
    pub style: String,
    pub pet_type: Option<String>,
    pub image_url: String,
    pub image_size: Option<String>,
    pub provider_model: Option<String>,
    pub provider_request_id: Option<String>,
    pub generated_images: Option<i32>,
    pub tokens_used: Option<i32>,
    pub status: String,
    pub is_public: bool,
    pub featured: bool,
}

impl From<NewGenerationRecord> for NewEmojiGenerationRow {
    fn from(record: NewGenerationRecord) -> Self {
        Self {
            style: record.style.as_str().to_string(),
            pet_type: record.pet_type,
            image_url: record.image_url,
            image_size: record.image_size,
            provider_model: record.provider_model,
            provider_request_id: record.provider_request_id,
            generated_images: record.generated_images,
            tokens_used: record.tokens_used,
            status: record.status.as_str().to_string(),
            is_public: record.is_public,
            featured: record.featured,
        }
    }
}

impl TryFrom<EmojiGenerationRow> for GenerationRecord {
    type Error = DatabaseError;

    fn try_from(row: EmojiGenerationRow) -> Result<Self, Self::Error> {
        let style: Style = row
            .style
            .parse()
            .map_err(|e: String| DatabaseError::new(DatabaseErrorKind::Decode(e)))?;
        let status: GenerationStatus = row
            .status
            .parse()
            .map_err(|e: String| DatabaseError::new(DatabaseErrorKind::Decode(e)))?;

        Ok(Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            style,
            pet_type: row.pet_type,
            image_url: row.image_url,
            image_size: row.image_size,
            provider_model: row.provider_model,
            provider_request_id: row.provider_request_id,
            generated_images: row.generated_images,
            tokens_used: row.tokens_used,
            status,
            error_message: row.error_message,
            is_public: row.is_public,
            featured: row.featured,
        })
    }
}
