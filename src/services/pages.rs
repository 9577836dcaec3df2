//! Page rendering from the dashboard snapshot.

use crate::models::page::{NavLink, Page, PageView};
use crate::services::dashboard::DashboardStats;

/// Render the view for a resolved page. Never fails: unknown paths render
/// the not-found view.
pub fn render(stats: &DashboardStats, page: &Page) -> PageView {
    match page {
        Page::Overview => PageView::Overview {
            cards: stats.totals.clone(),
            sales_over_time: stats.sales_over_time.clone(),
            sales_by_location: stats.sales_by_location.clone(),
            sales_by_segment: stats.sales_by_segment.clone(),
        },
        Page::ProductAnalysis => PageView::ProductAnalysis {
            sales_by_category: stats.sales_by_category.clone(),
            sales_by_segment: stats.sales_by_segment.clone(),
        },
        Page::RegionalAnalysis => PageView::RegionalAnalysis {
            sales_by_location: stats.sales_by_location.clone(),
            sales_by_ship_mode: stats.sales_by_ship_mode.clone(),
        },
        Page::OrderDetails => PageView::OrderDetails {
            row_count: stats.row_count,
            customer_record_count: stats.customer_record_count,
            order_date_range: stats.order_date_range,
            sales_over_time: stats.sales_over_time.clone(),
        },
        Page::NotFound { path } => PageView::NotFound {
            title: page.title().to_string(),
            message: format!("The pathname {path} was not recognised..."),
            path: path.clone(),
        },
    }
}

/// Resolve and render a path in one step.
pub fn render_path(stats: &DashboardStats, path: &str) -> PageView {
    let page = Page::from_path(path);
    tracing::debug!(path, ?page, "Rendering page");
    render(stats, &page)
}

/// Links for every navigable page, in display order.
pub fn navigation() -> Vec<NavLink> {
    Page::NAVIGATION
        .iter()
        .filter_map(|page| {
            page.path().map(|path| NavLink {
                title: page.title(),
                path,
            })
        })
        .collect()
}
