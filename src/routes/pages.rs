//! Page routes: resolve a dashboard path to its rendered view.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::ApiResponse;
use crate::models::page::{NavLink, PageView};
use crate::services::pages;
use crate::AppState;

/// GET /api/v1/navigation: title and path of every page.
pub async fn navigation() -> Json<ApiResponse<Vec<NavLink>>> {
    ApiResponse::success(pages::navigation())
}

/// GET /api/v1/pages: the overview page.
pub async fn overview(State(state): State<AppState>) -> Json<ApiResponse<PageView>> {
    ApiResponse::success(pages::render_path(state.dashboard.stats(), "/"))
}

/// GET /api/v1/pages/{*path}: view for `/{path}`; unknown paths get the
/// not-found view, not an error status.
pub async fn page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Json<ApiResponse<PageView>> {
    let pathname = format!("/{}", path.trim_start_matches('/'));
    ApiResponse::success(pages::render_path(state.dashboard.stats(), &pathname))
}
