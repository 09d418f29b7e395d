//! Global generation rate limiting.
//!
//! One generation per hour, decided by comparing the current time to the
//! timestamp of the most recent completed generation record. The limiter is
//! a read-only advisory probe: it does not reserve a slot, and two requests
//! racing past the check within the same window can both proceed. That is
//! the designed behavior of a soft global limiter, not a bug.
//!
//! The "fetch latest completed record" capability is injected through the
//! [`LatestCompletedSource`] trait so the limiter stays unit-testable
//! without a live database. When the source fails, the limiter **fails
//! open** and reports that generation is allowed; availability is preferred
//! over strictness here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod limiter;
mod source;
mod status;

pub use error::{RateLimitError, RateLimitErrorKind};
pub use limiter::{GenerationRateLimiter, RATE_LIMIT_WINDOW_MINUTES};
pub use source::LatestCompletedSource;
pub use status::RateLimitStatus;
