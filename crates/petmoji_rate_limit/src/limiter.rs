//! The generation rate limiter.

use crate::{LatestCompletedSource, RateLimitStatus};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

/// Width of the global generation window, in minutes.
pub const RATE_LIMIT_WINDOW_MINUTES: i64 = 60;

/// Decides whether a new generation request may proceed, based on the single
/// most recent completed record.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use petmoji_rate_limit::GenerationRateLimiter;
///
/// let limiter = GenerationRateLimiter::new();
/// let now = Utc::now();
///
/// let status = limiter.evaluate(now, Some(now - Duration::minutes(30)));
/// assert!(status.is_limited);
/// assert_eq!(status.remaining_minutes, 30);
///
/// let status = limiter.evaluate(now, None);
/// assert!(status.can_generate);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationRateLimiter;

impl GenerationRateLimiter {
    /// Creates a limiter with the fixed 60-minute window.
    pub fn new() -> Self {
        Self
    }

    /// Pure window evaluation against an already-fetched last record time.
    ///
    /// Elapsed time is floored to whole minutes, so a record 59 minutes and
    /// 59 seconds old still reports one remaining minute.
    pub fn evaluate(&self, now: DateTime<Utc>, last: Option<DateTime<Utc>>) -> RateLimitStatus {
        let Some(last) = last else {
            return RateLimitStatus::open(None);
        };

        let elapsed_minutes = (now - last).num_minutes();
        if elapsed_minutes < RATE_LIMIT_WINDOW_MINUTES {
            RateLimitStatus::limited(RATE_LIMIT_WINDOW_MINUTES - elapsed_minutes, last)
        } else {
            RateLimitStatus::open(Some(last))
        }
    }

    /// Checks the window against the injected record source.
    ///
    /// A source failure must not block users over an infrastructure fault,
    /// so the error is logged and mapped to the permissive status.
    #[instrument(skip_all)]
    pub async fn check(&self, source: &dyn LatestCompletedSource) -> RateLimitStatus {
        match source.latest_completed_at().await {
            Ok(last) => {
                let status = self.evaluate(Utc::now(), last);
                debug!(
                    is_limited = status.is_limited,
                    remaining_minutes = status.remaining_minutes,
                    "Rate limit check complete"
                );
                status
            }
            Err(e) => {
                warn!(error = %e, "Rate limit source failed, failing open");
                RateLimitStatus::open(None)
            }
        }
    }
}
