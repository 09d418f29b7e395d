//! Provider usage accounting.

use serde::{Deserialize, Serialize};

/// Usage numbers reported for one generation call.
///
/// Mirrors the provider's accounting record; echoed back to the client for
/// cost monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Number of images produced
    pub generated_images: u32,
    /// Output tokens consumed
    pub output_tokens: u32,
    /// Total tokens consumed
    pub total_tokens: u32,
}

impl Usage {
    /// Fixed usage numbers reported in mock mode.
    ///
    /// Token counts mirror a typical real response so client accounting code
    /// sees a realistic shape, but nothing was actually spent.
    pub fn mock() -> Self {
        Self {
            generated_images: 1,
            output_tokens: 16384,
            total_tokens: 16384,
        }
    }
}
