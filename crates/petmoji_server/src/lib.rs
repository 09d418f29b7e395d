//! HTTP API for the petmoji emoji pack generator.
//!
//! Thin request handlers over the core components: the generation
//! orchestrator, the gallery query service, the advisory rate limit probe,
//! an image proxy restricted to known artifact hosts, and an SVG placeholder
//! renderer for demo mode. All cross-request state lives in PostgreSQL;
//! handlers themselves are stateless.

#![forbid(unsafe_code)]

mod error;
pub mod gallery;
pub mod generate;
pub mod placeholder;
pub mod proxy;
pub mod rate_limit;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::app;
pub use state::{AppState, StoreRateLimitSource};
