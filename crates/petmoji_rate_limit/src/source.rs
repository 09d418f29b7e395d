//! Injected capability for reading the latest completed generation.

use crate::RateLimitError;
use chrono::{DateTime, Utc};

/// Capability to fetch the creation time of the most recent completed
/// generation record.
///
/// The persistence gateway implements this; tests substitute a fixture. The
/// limiter never touches a concrete database client.
#[async_trait::async_trait]
pub trait LatestCompletedSource: Send + Sync {
    /// Creation time of the newest record with completed status, if any.
    async fn latest_completed_at(&self) -> Result<Option<DateTime<Utc>>, RateLimitError>;
}
