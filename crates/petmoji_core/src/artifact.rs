//! Artifact descriptor returned to clients.

use crate::Style;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptor of one generated emoji grid artifact.
///
/// # Examples
///
/// ```
/// use petmoji_core::{EmojiArtifact, Style};
///
/// let artifact = EmojiArtifact::grid(
///     Style::Cute,
///     "https://cdn.example/emoji-packs/emoji_pack_cute_1758082762296.jpeg".to_string(),
///     "2048x2048".to_string(),
///     1758082762296,
/// );
/// assert_eq!(artifact.id, "emoji_grid_1758082762296");
/// assert_eq!(artifact.kind, "grid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiArtifact {
    /// Opaque artifact identifier, derived from the generation timestamp
    pub id: String,
    /// Human-readable description
    pub description: String,
    /// Style echoed from the request
    pub style: Style,
    /// Artifact kind; always "grid" for the 3x3 pack
    #[serde(rename = "type")]
    pub kind: String,
    /// Public URL of the stored artifact
    pub url: String,
    /// Pixel dimensions, e.g. "2048x2048"
    pub size: String,
    /// When the artifact was produced
    pub timestamp: DateTime<Utc>,
}

impl EmojiArtifact {
    /// Build the grid artifact descriptor for a finished generation.
    pub fn grid(style: Style, url: String, size: String, unix_millis: i64) -> Self {
        Self {
            id: format!("emoji_grid_{}", unix_millis),
            description: format!("{} style emoji grid", style),
            style,
            kind: "grid".to_string(),
            url,
            size,
            timestamp: Utc::now(),
        }
    }
}
