//! Image generation provider clients.
//!
//! The production provider is Doubao (Volcengine Ark) image-to-image
//! generation. The [`ImageGenerator`] trait is the seam the orchestrator
//! depends on, so tests can substitute a mock without touching the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod doubao;
mod generator;

pub use doubao::{
    DoubaoClient, GeneratedImage, ImageGenerationRequest, ImageGenerationRequestBuilder,
    ImageGenerationResponse, ImageUsage, DOUBAO_MODEL,
};
pub use generator::ImageGenerator;
pub use petmoji_error::{ProviderError, ProviderErrorKind};
