//! Shared fixtures for server tests: an in-memory store plus scripted
//! provider and storage backends.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use petmoji_core::{
    GenerationRecord, GenerationStats, GenerationStatus, NewGenerationRecord, Style,
};
use petmoji_database::{GenerationFilter, GenerationPage, GenerationStore};
use petmoji_error::{
    DatabaseError, DatabaseErrorKind, ProviderError, StorageError, StorageErrorKind,
};
use petmoji_models::{ImageGenerationResponse, ImageGenerator};
use petmoji_server::AppState;
use petmoji_storage::{ObjectStorage, StorageResult};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

type DatabaseResult<T> = Result<T, DatabaseError>;

/// In-memory [`GenerationStore`] mirroring the repository's visibility and
/// pagination rules.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<GenerationRecord>>,
    insert_calls: AtomicUsize,
    fail_writes: bool,
    fail_reads: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<GenerationRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Number of insert attempts, successful or not.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<GenerationRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check_reads(&self) -> DatabaseResult<()> {
        if self.fail_reads {
            Err(DatabaseError::new(DatabaseErrorKind::Query(
                "read failed".to_string(),
            )))
        } else {
            Ok(())
        }
    }
}

fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 { 0 } else { (total + limit - 1) / limit }
}

#[async_trait]
impl GenerationStore for InMemoryStore {
    async fn insert(&self, record: NewGenerationRecord) -> DatabaseResult<GenerationRecord> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(DatabaseError::new(DatabaseErrorKind::Query(
                "insert failed".to_string(),
            )));
        }
        let now = Utc::now();
        let stored = GenerationRecord {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            style: record.style,
            pet_type: record.pet_type,
            image_url: record.image_url,
            image_size: record.image_size,
            provider_model: record.provider_model,
            provider_request_id: record.provider_request_id,
            generated_images: record.generated_images,
            tokens_used: record.tokens_used,
            status: record.status,
            error_message: None,
            is_public: record.is_public,
            featured: record.featured,
        };
        self.records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn latest_completed_at(
        &self,
    ) -> DatabaseResult<Option<chrono::DateTime<Utc>>> {
        self.check_reads()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == GenerationStatus::Completed)
            .map(|r| r.created_at)
            .max())
    }

    async fn list(&self, filter: GenerationFilter) -> DatabaseResult<GenerationPage> {
        self.check_reads()?;
        let mut matching: Vec<GenerationRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_public)
            .filter(|r| filter.style.is_none_or(|s| r.style == s))
            .filter(|r| filter.featured.is_none_or(|f| r.featured == f))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as i64;
        let start = ((filter.page - 1) * filter.limit).max(0) as usize;
        let data = matching
            .into_iter()
            .skip(start)
            .take(filter.limit.max(0) as usize)
            .collect();
        Ok(GenerationPage {
            data,
            page: filter.page,
            limit: filter.limit,
            total,
            total_pages: total_pages(total, filter.limit),
        })
    }

    async fn get_public(&self, id: Uuid) -> DatabaseResult<Option<GenerationRecord>> {
        self.check_reads()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id && r.is_public)
            .cloned())
    }

    async fn stats(&self) -> DatabaseResult<GenerationStats> {
        self.check_reads()?;
        Ok(GenerationStats::tally(
            self.records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.is_public)
                .map(|r| (r.style, r.status)),
        ))
    }
}

/// A completed public record created `age_minutes` ago.
pub fn record(style: Style, age_minutes: i64) -> GenerationRecord {
    let created = Utc::now() - Duration::minutes(age_minutes);
    GenerationRecord {
        id: Uuid::new_v4(),
        created_at: created,
        updated_at: created,
        style,
        pet_type: None,
        image_url: format!("https://cdn.test/emoji-packs/{}.jpeg", style),
        image_size: Some("2048x2048".to_string()),
        provider_model: Some("doubao-seedream-4-0-250828".to_string()),
        provider_request_id: Some("req_test".to_string()),
        generated_images: Some(1),
        tokens_used: Some(16384),
        status: GenerationStatus::Completed,
        error_message: None,
        is_public: true,
        featured: false,
    }
}

/// Same as [`record`], but hidden from the gallery.
pub fn private_record(style: Style, age_minutes: i64) -> GenerationRecord {
    GenerationRecord {
        is_public: false,
        ..record(style, age_minutes)
    }
}

/// Provider double returning a fixed scripted result.
pub struct MockGenerator {
    result: Mutex<Result<ImageGenerationResponse, ProviderError>>,
}

impl MockGenerator {
    pub fn returning(result: Result<ImageGenerationResponse, ProviderError>) -> Self {
        Self {
            result: Mutex::new(result),
        }
    }
}

#[async_trait]
impl ImageGenerator for MockGenerator {
    fn model(&self) -> &str {
        "doubao-seedream-4-0-250828"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _image_base64: &str,
    ) -> Result<ImageGenerationResponse, ProviderError> {
        self.result.lock().unwrap().clone()
    }
}

/// A success payload carrying inline base64 image data.
pub fn inline_response(b64: &str) -> ImageGenerationResponse {
    serde_json::from_value(json!({
        "id": "req_inline",
        "model": "doubao-seedream-4-0-250828",
        "data": [{ "b64_json": b64, "size": "2048x2048" }],
        "usage": { "generated_images": 1, "output_tokens": 16384, "total_tokens": 16384 }
    }))
    .unwrap()
}

/// A success payload with no image data at all.
pub fn empty_response() -> ImageGenerationResponse {
    serde_json::from_value(json!({
        "id": "req_empty",
        "model": "doubao-seedream-4-0-250828",
        "data": [],
        "usage": { "generated_images": 0, "output_tokens": 0, "total_tokens": 0 }
    }))
    .unwrap()
}

/// Storage double recording uploads.
#[derive(Default)]
pub struct MockStorage {
    puts: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Recorded `(key, content_type)` pairs.
    pub fn puts(&self) -> Vec<(String, String)> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MockStorage {
    async fn put_object(
        &self,
        key: &str,
        _data: &[u8],
        content_type: &str,
    ) -> StorageResult<String> {
        if self.fail {
            return Err(StorageError::new(StorageErrorKind::Rejected {
                status_code: 403,
                message: "signature mismatch".to_string(),
            }));
        }
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string()));
        Ok(format!("https://cdn.test/{}", key))
    }
}

/// Assemble handler state around the given doubles.
pub fn state_with(
    store: Arc<InMemoryStore>,
    generator: Option<Arc<MockGenerator>>,
    storage: Option<Arc<MockStorage>>,
) -> AppState {
    AppState::new(
        store,
        generator.map(|g| g as Arc<dyn ImageGenerator>),
        storage.map(|s| s as Arc<dyn ObjectStorage>),
    )
    .unwrap()
}
