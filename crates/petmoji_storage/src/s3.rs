//! S3-compatible storage backend.

use crate::sigv4::{self, SigningRequest};
use crate::{ObjectStorage, StorageResult};
use chrono::Utc;
use petmoji_error::{StorageError, StorageErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Bounded timeout for one upload attempt. There are no retries; a slow or
/// failed upload is terminal for the generation request.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Service endpoint, e.g. `https://{account}.r2.cloudflarestorage.com`
    pub endpoint: String,
    /// Bucket name
    pub bucket: String,
    /// Signing region; Cloudflare R2 uses `auto`
    pub region: String,
    /// Access key id
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Base URL objects are publicly served from
    pub public_base_url: String,
}

impl S3Config {
    /// Load the Cloudflare R2 configuration from the environment.
    ///
    /// Reads `CLOUDFLARE_ACCOUNT_ID`, `CLOUDFLARE_R2_ACCESS_KEY_ID` and
    /// `CLOUDFLARE_R2_SECRET_ACCESS_KEY`; the public URL comes from
    /// `CLOUDFLARE_R2_PUBLIC_URL` or falls back to the account's `r2.dev`
    /// domain. The bucket defaults to `pet-emoji` unless `R2_BUCKET` is set.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_env() -> StorageResult<Self> {
        let account_id = require_var("CLOUDFLARE_ACCOUNT_ID")?;
        let access_key_id = require_var("CLOUDFLARE_R2_ACCESS_KEY_ID")?;
        let secret_access_key = require_var("CLOUDFLARE_R2_SECRET_ACCESS_KEY")?;
        let public_base_url = std::env::var("CLOUDFLARE_R2_PUBLIC_URL")
            .unwrap_or_else(|_| format!("https://pub-{}.r2.dev", account_id));
        let bucket = std::env::var("R2_BUCKET").unwrap_or_else(|_| "pet-emoji".to_string());

        Ok(Self {
            endpoint: format!("https://{}.r2.cloudflarestorage.com", account_id),
            bucket,
            region: "auto".to_string(),
            access_key_id,
            secret_access_key,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn require_var(name: &'static str) -> StorageResult<String> {
    std::env::var(name).map_err(|_| {
        StorageError::new(StorageErrorKind::MissingCredentials(format!(
            "{} environment variable not set",
            name
        )))
    })
}

/// Storage backend speaking the S3 PUT API with SigV4 signing.
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
    config: S3Config,
}

impl S3Storage {
    /// Create a backend for the given bucket configuration.
    pub fn new(config: S3Config) -> StorageResult<Self> {
        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| {
                StorageError::new(StorageErrorKind::InvalidConfig(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        Ok(Self { client, config })
    }

    /// Create a backend from environment configuration.
    pub fn from_env() -> StorageResult<Self> {
        Self::new(S3Config::from_env()?)
    }

    fn host(&self) -> StorageResult<String> {
        self.config
            .endpoint
            .strip_prefix("https://")
            .map(|h| h.trim_end_matches('/').to_string())
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::InvalidConfig(format!(
                    "Endpoint must be https: {}",
                    self.config.endpoint
                )))
            })
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3Storage {
    #[instrument(skip(self, data), fields(key = %key, bytes = data.len()))]
    async fn put_object(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> StorageResult<String> {
        let host = self.host()?;
        let encoded_key = sigv4::uri_encode_key(key);
        let path = format!("/{}/{}", self.config.bucket, encoded_key);
        let payload_hash = sigv4::sha256_hex(data);
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

        let signature = sigv4::sign(
            &SigningRequest {
                host: &host,
                path: &path,
                content_type,
                payload_hash: &payload_hash,
                amz_date: &amz_date,
            },
            &self.config.access_key_id,
            &self.config.secret_access_key,
            &self.config.region,
        );

        debug!(bucket = %self.config.bucket, "Uploading object");

        let response = self
            .client
            .put(format!("{}{}", self.config.endpoint, path))
            .header("host", &host)
            .header("content-type", content_type)
            .header("x-amz-content-sha256", &payload_hash)
            .header("x-amz-date", &amz_date)
            .header("authorization", &signature.authorization)
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Upload request failed");
                StorageError::new(StorageErrorKind::Request(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Storage service rejected upload");
            return Err(StorageError::new(StorageErrorKind::Rejected {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let public_url = format!("{}/{}", self.config.public_base_url, key);
        info!(url = %public_url, "Upload complete");
        Ok(public_url)
    }
}
