//! Health check endpoints for liveness and readiness checks.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness check detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub orders: usize,
    pub months: usize,
    pub located_states: usize,
}

/// Liveness check: always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness check: reports the size of the loaded snapshot.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let stats = state.dashboard.stats();
    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        orders: stats.row_count,
        months: stats.sales_over_time.len(),
        located_states: stats.sales_by_location.len(),
    })
}
