//! Route definitions for the Superstore dashboard API.

pub mod dashboard;
pub mod health;
pub mod pages;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full router with CORS, gzip and request tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(e) => {
            tracing::warn!(
                frontend_url = %state.config.frontend_url,
                error = %e,
                "Invalid FRONTEND_URL, allowing any origin"
            );
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let api_routes = Router::new()
        .route("/dashboard", get(dashboard::stats))
        .route("/dashboard/totals/{column}", get(dashboard::total))
        .route("/navigation", get(pages::navigation))
        .route("/pages", get(pages::overview))
        .route("/pages/{*path}", get(pages::page));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api/v1", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
