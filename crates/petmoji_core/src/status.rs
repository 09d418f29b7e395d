//! Terminal status of a generation record.

use serde::{Deserialize, Serialize};

/// Status of a generation attempt.
///
/// Only `Completed` and `Failed` are ever persisted; `Processing` exists in
/// the schema contract but no in-flight row is written before the external
/// call resolves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    /// Generation in flight (schema contract only, never persisted)
    #[display("processing")]
    Processing,
    /// Generation and upload both succeeded
    #[display("completed")]
    Completed,
    /// Generation attempt failed
    #[display("failed")]
    Failed,
}

impl GenerationStatus {
    /// Convert to string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Processing => "processing",
            GenerationStatus::Completed => "completed",
            GenerationStatus::Failed => "failed",
        }
    }
}

impl std::str::FromStr for GenerationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(GenerationStatus::Processing),
            "completed" => Ok(GenerationStatus::Completed),
            "failed" => Ok(GenerationStatus::Failed),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}
