pub mod config;
pub mod errors;
pub mod models;
pub mod parsers;
pub mod routes;
pub mod services;

use std::sync::Arc;

use services::dashboard::Dashboard;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub config: config::AppConfig,
}
