//! Route table.

use crate::state::AppState;
use crate::{gallery, generate, placeholder, proxy, rate_limit};
use axum::routing::get;
use axum::Router;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/generate", get(generate::health).post(generate::generate))
        .route(
            "/generations",
            get(gallery::list_generations).head(gallery::head_generations),
        )
        .route("/generations/:id", get(gallery::get_generation))
        .route("/rate-limit-status", get(rate_limit::rate_limit_status))
        .route("/image-proxy", get(proxy::image_proxy))
        .route("/placeholder/emoji", get(placeholder::placeholder_emoji))
        .with_state(state)
}
