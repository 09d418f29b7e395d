//! Core domain types for the petmoji emoji pack generator.
//!
//! This crate provides the foundation data types shared across the petmoji
//! workspace: the expression style enum, generation status, usage accounting,
//! the artifact descriptor returned to clients, and the style-keyed prompt
//! templates sent to the image generation provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
pub mod prompt;
mod record;
mod stats;
mod status;
mod style;
mod usage;

pub use artifact::EmojiArtifact;
pub use record::{GenerationRecord, NewGenerationRecord};
pub use stats::{GenerationStats, StyleCounts};
pub use status::GenerationStatus;
pub use style::Style;
pub use usage::Usage;
