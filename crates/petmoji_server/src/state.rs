//! Shared application state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use petmoji_database::{GenerationStore, PgGenerationStore};
use petmoji_models::{DoubaoClient, ImageGenerator};
use petmoji_rate_limit::{
    GenerationRateLimiter, LatestCompletedSource, RateLimitError, RateLimitErrorKind,
};
use petmoji_storage::{ObjectStorage, S3Storage};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Timeout for fetching a provider-hosted artifact before upload.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Capabilities shared by every request handler.
///
/// The generator and storage backends are optional so the server can come up
/// in demo-only mode without provider or R2 credentials; real generation
/// requests then fail at request time with a configuration error.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway.
    pub store: Arc<dyn GenerationStore>,
    /// Image generation provider, when configured.
    pub generator: Option<Arc<dyn ImageGenerator>>,
    /// Artifact storage backend, when configured.
    pub storage: Option<Arc<dyn ObjectStorage>>,
    /// Global generation window probe.
    pub limiter: GenerationRateLimiter,
    /// Client for artifact downloads and the image proxy.
    pub http: reqwest::Client,
}

impl AppState {
    /// Assemble state from explicit components. Used directly by tests.
    pub fn new(
        store: Arc<dyn GenerationStore>,
        generator: Option<Arc<dyn ImageGenerator>>,
        storage: Option<Arc<dyn ObjectStorage>>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()?;
        Ok(Self {
            store,
            generator,
            storage,
            limiter: GenerationRateLimiter::new(),
            http,
        })
    }

    /// Assemble production state from the environment.
    ///
    /// `DATABASE_URL` is required. `DOUBAO_API_KEY` and the Cloudflare R2
    /// credentials are optional; a missing set is logged and the matching
    /// capability is left unconfigured.
    pub fn from_env() -> anyhow::Result<Self> {
        let store = PgGenerationStore::from_env()?;

        let generator: Option<Arc<dyn ImageGenerator>> = match DoubaoClient::from_env() {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                warn!(error = %e, "Doubao client unavailable, generation disabled");
                None
            }
        };

        let storage: Option<Arc<dyn ObjectStorage>> = match S3Storage::from_env() {
            Ok(storage) => Some(Arc::new(storage)),
            Err(e) => {
                warn!(error = %e, "R2 storage unavailable, generation disabled");
                None
            }
        };

        Self::new(Arc::new(store), generator, storage)
    }
}

/// Adapter feeding the rate limiter from the generation store.
///
/// Store errors are folded into the limiter's source error so the limiter
/// can apply its fail-open policy without knowing about the database.
pub struct StoreRateLimitSource {
    store: Arc<dyn GenerationStore>,
}

impl StoreRateLimitSource {
    /// Wrap a store as a limiter source.
    pub fn new(store: Arc<dyn GenerationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LatestCompletedSource for StoreRateLimitSource {
    async fn latest_completed_at(&self) -> Result<Option<DateTime<Utc>>, RateLimitError> {
        self.store
            .latest_completed_at()
            .await
            .map_err(|e| RateLimitError::new(RateLimitErrorKind::Source(e.to_string())))
    }
}
