//! Provider-agnostic generation seam.

use crate::ImageGenerationResponse;
use petmoji_error::ProviderError;

/// Trait for image-to-image emoji grid generation.
///
/// Implemented by [`DoubaoClient`](crate::DoubaoClient) for production and
/// by mocks in tests.
#[async_trait::async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Identifier of the model this generator drives.
    fn model(&self) -> &str;

    /// Generate the emoji grid from a prompt and a base64-encoded input photo.
    async fn generate(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<ImageGenerationResponse, ProviderError>;
}
