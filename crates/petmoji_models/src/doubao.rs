//! Doubao (Volcengine Ark) image generation client.

use crate::ImageGenerator;
use base64::Engine;
use derive_getters::Getters;
use petmoji_error::{ProviderError, ProviderErrorKind};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const DOUBAO_API_BASE: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// Model identifier for the Seedream image generation model.
pub const DOUBAO_MODEL: &str = "doubao-seedream-4-0-250828";

/// Requested output dimensions for the emoji grid.
const IMAGE_SIZE: &str = "2048x2048";

/// Bounded timeout for one generation call. Image generation is slow, but a
/// request that has not resolved in two minutes never will; there are no
/// retries.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(120);

/// Request payload for the `images/generations` endpoint.
#[derive(Debug, Clone, Serialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageGenerationRequest {
    /// Model identifier
    model: String,
    /// Full natural-language prompt
    prompt: String,
    /// Base64-encoded input photo
    image: String,
    /// Requested output dimensions
    size: String,
    /// Either "url" or "b64_json"
    response_format: String,
    /// Streaming is not used on this path
    stream: bool,
}

/// One generated image in the provider response.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GeneratedImage {
    /// URL of the generated image, when response_format was "url"
    #[serde(default)]
    url: Option<String>,
    /// Inline base64 image data, when the provider returned it instead
    #[serde(default)]
    b64_json: Option<String>,
    /// Pixel dimensions of the output
    #[serde(default)]
    size: Option<String>,
}

impl GeneratedImage {
    /// Decode inline base64 image data, if present.
    pub fn inline_bytes(&self) -> Option<Result<Vec<u8>, ProviderError>> {
        self.b64_json.as_ref().map(|data| {
            base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|e| ProviderError::new(ProviderErrorKind::Base64Decode(e.to_string())))
        })
    }
}

/// Usage record attached to a generation response.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Getters)]
pub struct ImageUsage {
    /// Number of images produced
    generated_images: u32,
    /// Output tokens consumed
    output_tokens: u32,
    /// Total tokens consumed
    total_tokens: u32,
}

/// Response payload from the `images/generations` endpoint.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ImageGenerationResponse {
    /// Provider request identifier, kept for audit
    id: String,
    /// Model that produced the artifact
    model: String,
    /// Generated images; expected to hold exactly one grid
    data: Vec<GeneratedImage>,
    /// Usage accounting
    usage: ImageUsage,
}

impl ImageGenerationResponse {
    /// The single generated grid image.
    ///
    /// # Errors
    ///
    /// Returns `EmptyResponse` when the success payload carried no image.
    pub fn primary_image(&self) -> Result<&GeneratedImage, ProviderError> {
        self.data
            .first()
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))
    }
}

/// Doubao API client.
#[derive(Debug, Clone)]
pub struct DoubaoClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl DoubaoClient {
    /// Creates a new Doubao client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Ark API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;
        debug!("Creating new Doubao client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DOUBAO_API_BASE.to_string(),
            model: DOUBAO_MODEL.to_string(),
        })
    }

    /// Creates a client from the `DOUBAO_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("DOUBAO_API_KEY")
            .map_err(|_| ProviderError::new(ProviderErrorKind::MissingApiKey))?;
        Self::new(api_key)
    }

    /// Override the API base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends one generation request to the Doubao API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_images(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, ProviderError> {
        debug!("Sending request to Doubao API");

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Doubao API");
                ProviderError::new(ProviderErrorKind::Request(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Doubao API returned error");
            return Err(ProviderError::new(ProviderErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let generation: ImageGenerationResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Doubao response");
            ProviderError::new(ProviderErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        info!(
            request_id = %generation.id(),
            generated_images = generation.usage().generated_images(),
            total_tokens = generation.usage().total_tokens(),
            "Received response from Doubao"
        );
        Ok(generation)
    }
}

#[async_trait::async_trait]
impl ImageGenerator for DoubaoClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<ImageGenerationResponse, ProviderError> {
        let request = ImageGenerationRequestBuilder::default()
            .model(self.model.clone())
            .prompt(prompt)
            .image(image_base64)
            .size(IMAGE_SIZE)
            .response_format("url")
            .stream(false)
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;
        self.generate_images(&request).await
    }
}
