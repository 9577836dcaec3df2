//! Dashboard routes: the precomputed aggregate snapshot.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::{ApiResponse, AppError};
use crate::models::order::Metric;
use crate::services::dashboard::DashboardStats;
use crate::AppState;

/// Scalar total of a single column.
#[derive(Debug, Serialize)]
pub struct ColumnTotal {
    pub column: Metric,
    pub total: f64,
    pub display: String,
}

/// GET /api/v1/dashboard: every aggregate in the snapshot.
pub async fn stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    ApiResponse::success(state.dashboard.stats().clone())
}

/// GET /api/v1/dashboard/totals/{column}: scalar total of one metric column.
pub async fn total(
    State(state): State<AppState>,
    Path(column): Path<String>,
) -> Result<Json<ApiResponse<ColumnTotal>>, AppError> {
    let metric: Metric = column.parse()?;
    let card = state.dashboard.total_card(metric.column())?;
    Ok(ApiResponse::success(ColumnTotal {
        column: metric,
        total: card.value,
        display: card.display.clone(),
    }))
}
