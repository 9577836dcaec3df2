//! Dashboard pages and the views rendered for them.

use serde::Serialize;

use crate::models::aggregate::{
    DateRange, GroupTotal, MonthlySales, ShipModeBreakdown, StateSales, TotalCard,
};

/// A navigable dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Overview,
    ProductAnalysis,
    RegionalAnalysis,
    OrderDetails,
    NotFound { path: String },
}

impl Page {
    /// Pages listed in the navigation bar, in display order.
    pub const NAVIGATION: [Page; 4] = [
        Page::Overview,
        Page::ProductAnalysis,
        Page::RegionalAnalysis,
        Page::OrderDetails,
    ];

    /// Resolve a request path. Unknown paths keep the path for the 404 view.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Page::Overview,
            "/page-1" => Page::ProductAnalysis,
            "/page-2" => Page::RegionalAnalysis,
            "/page-3" => Page::OrderDetails,
            other => Page::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// Canonical path, `None` for not-found pages.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Page::Overview => Some("/"),
            Page::ProductAnalysis => Some("/page-1"),
            Page::RegionalAnalysis => Some("/page-2"),
            Page::OrderDetails => Some("/page-3"),
            Page::NotFound { .. } => None,
        }
    }

    /// Navigation label.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::ProductAnalysis => "Product Analysis",
            Page::RegionalAnalysis => "Regional Analysis",
            Page::OrderDetails => "Order Details",
            Page::NotFound { .. } => "404: Not found",
        }
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
}

/// Rendered content of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Overview {
        cards: Vec<TotalCard>,
        sales_over_time: Vec<MonthlySales>,
        sales_by_location: Vec<StateSales>,
        sales_by_segment: Vec<GroupTotal>,
    },
    ProductAnalysis {
        sales_by_category: Vec<GroupTotal>,
        sales_by_segment: Vec<GroupTotal>,
    },
    RegionalAnalysis {
        sales_by_location: Vec<StateSales>,
        sales_by_ship_mode: Vec<ShipModeBreakdown>,
    },
    OrderDetails {
        row_count: usize,
        customer_record_count: u64,
        order_date_range: Option<DateRange>,
        sales_over_time: Vec<MonthlySales>,
    },
    NotFound {
        title: String,
        message: String,
        path: String,
    },
}
