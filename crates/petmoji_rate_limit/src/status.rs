//! Rate limit status reported to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verdict of one rate limit check.
///
/// Serialized in camelCase for the HTTP surface. `remainingMinutes` is the
/// single wait-time field; no alternate shape is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitStatus {
    /// Whether the window is currently closed
    pub is_limited: bool,
    /// Whole minutes until the window reopens; 0 when open
    pub remaining_minutes: i64,
    /// Whether a new generation may proceed right now
    pub can_generate: bool,
    /// Creation time of the last completed generation, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_generation_time: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
    /// The permissive status: not limited, generation allowed.
    pub fn open(last_generation_time: Option<DateTime<Utc>>) -> Self {
        Self {
            is_limited: false,
            remaining_minutes: 0,
            can_generate: true,
            last_generation_time,
        }
    }

    /// The limited status with the given wait time.
    pub fn limited(remaining_minutes: i64, last_generation_time: DateTime<Utc>) -> Self {
        Self {
            is_limited: true,
            remaining_minutes,
            can_generate: false,
            last_generation_time: Some(last_generation_time),
        }
    }
}
