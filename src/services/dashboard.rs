//! Dashboard snapshot: every aggregate computed once at startup.

use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::aggregate::{
    DateRange, GroupTotal, MonthlySales, ShipModeBreakdown, StateSales, TotalCard,
};
use crate::models::order::{Metric, OrderRecord};
use crate::models::state::StateLookup;
use crate::parsers::orders::OrdersParser;
use crate::parsers::states::StatesParser;
use crate::parsers::Parser;
use crate::services::{aggregation, format, source};

/// Aggregated statistics for every dashboard page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub row_count: usize,
    pub customer_record_count: u64,
    pub order_date_range: Option<DateRange>,
    pub totals: Vec<TotalCard>,
    pub sales_over_time: Vec<MonthlySales>,
    pub sales_by_location: Vec<StateSales>,
    pub sales_by_segment: Vec<GroupTotal>,
    pub sales_by_category: Vec<GroupTotal>,
    pub sales_by_ship_mode: Vec<ShipModeBreakdown>,
}

/// Immutable aggregate snapshot shared by all requests.
#[derive(Debug, Clone)]
pub struct Dashboard {
    stats: DashboardStats,
}

impl Dashboard {
    /// Run the whole pipeline over already-parsed tables.
    pub fn build(orders: &[OrderRecord], states: &[StateLookup]) -> Self {
        let totals = Metric::ALL
            .into_iter()
            .map(|metric| total_card(metric, aggregation::sum_metric(orders, metric)))
            .collect();

        let stats = DashboardStats {
            row_count: orders.len(),
            customer_record_count: aggregation::customer_record_count(orders),
            order_date_range: aggregation::order_date_range(orders),
            totals,
            sales_over_time: aggregation::sales_over_time(orders),
            sales_by_location: aggregation::sales_by_location(orders, states),
            sales_by_segment: aggregation::sales_by_segment(orders),
            sales_by_category: aggregation::sales_by_category(orders),
            sales_by_ship_mode: aggregation::sales_by_ship_mode(orders),
        };

        Self { stats }
    }

    /// Fetch and parse both sources, then build the snapshot.
    ///
    /// Any load failure is returned as-is; there is no partial snapshot.
    pub async fn load(config: &AppConfig) -> Result<Self, AppError> {
        let (orders_data, states_data) = tokio::try_join!(
            fetch_logged(&config.orders_source),
            fetch_logged(&config.states_source),
        )?;

        let orders = OrdersParser::new().parse(&orders_data)?;
        let states = StatesParser::new().parse(&states_data)?;

        report_data_quality(&orders, &states);

        let dashboard = Self::build(&orders, &states);
        tracing::info!(
            orders = orders.len(),
            states = states.len(),
            months = dashboard.stats.sales_over_time.len(),
            "Dashboard snapshot built"
        );
        Ok(dashboard)
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    /// Precomputed scalar total for a column name.
    pub fn total(&self, column: &str) -> Result<f64, AppError> {
        self.total_card(column).map(|card| card.value)
    }

    /// Precomputed total card (value and display string) for a column name.
    pub fn total_card(&self, column: &str) -> Result<&TotalCard, AppError> {
        let metric: Metric = column.parse()?;
        self.stats
            .totals
            .iter()
            .find(|card| card.metric == metric)
            .ok_or_else(|| AppError::Internal(format!("total for '{metric}' was not computed")))
    }
}

fn total_card(metric: Metric, value: f64) -> TotalCard {
    let display = if metric.is_currency() {
        format::currency(value)
    } else {
        format::abbreviate(value)
    };

    TotalCard {
        metric,
        title: metric.title().to_string(),
        value,
        display,
    }
}

async fn fetch_logged(uri: &str) -> Result<Vec<u8>, AppError> {
    source::fetch(uri).await.inspect_err(|e| {
        tracing::error!(uri, error = %e, "Failed to load source");
    })
}

/// Log the tolerated data-quality gaps: orders dropped by the state join and
/// rows shipped before they were ordered.
fn report_data_quality(orders: &[OrderRecord], states: &[StateLookup]) {
    let unmatched = aggregation::unmatched_states(orders, states);
    if !unmatched.is_empty() {
        tracing::warn!(
            states = ?unmatched,
            "Order states missing from lookup; excluded from location totals"
        );
    }

    let early = aggregation::ship_before_order_count(orders);
    if early > 0 {
        tracing::warn!(rows = early, "Orders with ship date before order date");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dashboard() -> Dashboard {
        let orders = OrdersParser::new()
            .parse(include_bytes!("../../tests/fixtures/orders_sample.csv"))
            .unwrap();
        let states = StatesParser::new()
            .parse(include_bytes!("../../tests/fixtures/states_sample.csv"))
            .unwrap();
        Dashboard::build(&orders, &states)
    }

    #[test]
    fn totals_cover_every_metric() {
        let dashboard = fixture_dashboard();
        let metrics: Vec<Metric> = dashboard.stats().totals.iter().map(|c| c.metric).collect();
        assert_eq!(metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn total_cards_are_formatted() {
        let dashboard = fixture_dashboard();
        let cards = &dashboard.stats().totals;
        assert_eq!(cards[0].title, "Total Sales");
        assert_eq!(cards[0].display, "$2.6K");
        assert_eq!(cards[3].title, "Total Quantity");
        assert_eq!(cards[3].display, "28.0");
    }

    #[test]
    fn total_by_column_name() {
        let dashboard = fixture_dashboard();
        assert!((dashboard.total("Sales").unwrap() - 2560.8535).abs() < 1e-6);
        assert!((dashboard.total("quantity").unwrap() - 28.0).abs() < 1e-9);
        assert!(matches!(
            dashboard.total("postal_code"),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn total_card_by_column_name_keeps_currency_display() {
        let dashboard = fixture_dashboard();
        assert_eq!(dashboard.total_card("sales").unwrap().display, "$2.6K");
        assert_eq!(dashboard.total_card("Profit").unwrap().display, "$60.1");
        assert_eq!(dashboard.total_card("Quantity").unwrap().display, "28.0");
    }

    #[test]
    fn location_excludes_states_without_lookup() {
        let dashboard = fixture_dashboard();
        let states: Vec<&str> = dashboard
            .stats()
            .sales_by_location
            .iter()
            .map(|s| s.state.as_str())
            .collect();
        assert_eq!(
            states,
            vec!["California", "Florida", "Kentucky", "North Carolina", "Washington"]
        );
    }

    #[test]
    fn empty_tables_build_an_empty_snapshot() {
        let dashboard = Dashboard::build(&[], &[]);
        let stats = dashboard.stats();
        assert_eq!(stats.row_count, 0);
        assert!(stats.sales_over_time.is_empty());
        assert!(stats.sales_by_location.is_empty());
        assert_eq!(stats.order_date_range, None);
        assert_eq!(stats.sales_by_ship_mode.len(), 4);
        assert_eq!(dashboard.total("sales").unwrap(), 0.0);
        assert_eq!(stats.totals[0].display, "$0.0");
    }
}
