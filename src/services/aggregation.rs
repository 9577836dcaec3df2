//! Aggregation pipeline over the order table.
//!
//! Every function here is a pure scan of the in-memory rows. Grouped results
//! come back ordered by their key so repeated runs over the same table give
//! identical output.

use std::collections::{BTreeMap, HashMap};

use crate::errors::AppError;
use crate::models::aggregate::{
    DateRange, GroupTotal, MonthlySales, ShipModeBreakdown, StateSales, YearMonth,
};
use crate::models::order::{Metric, OrderRecord, ShipMode};
use crate::models::state::StateLookup;

/// Round half away from zero to one decimal place.
pub fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sum of a metric over every row. Empty tables sum to 0.
pub fn sum_metric(orders: &[OrderRecord], metric: Metric) -> f64 {
    orders
        .iter()
        .fold(0.0, |acc, order| acc + order.metric(metric))
}

/// Sum of a column by name. Unknown columns are a `MissingField` error.
pub fn scalar_total(orders: &[OrderRecord], column: &str) -> Result<f64, AppError> {
    let metric: Metric = column.parse()?;
    Ok(sum_metric(orders, metric))
}

/// Monthly sales, ascending by month. Months without orders are absent.
pub fn sales_over_time(orders: &[OrderRecord]) -> Vec<MonthlySales> {
    let mut by_month: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for order in orders {
        *by_month
            .entry(YearMonth::from_date(order.order_date))
            .or_insert(0.0) += order.sales;
    }

    by_month
        .into_iter()
        .map(|(month, sales)| MonthlySales { month, sales })
        .collect()
}

/// Summed sales per state name, ordered by state.
pub fn sales_by_state(orders: &[OrderRecord]) -> Vec<GroupTotal> {
    group_sales(orders, |order| order.state.as_str())
}

/// Sales per state inner-joined to the lookup table.
///
/// States with no lookup entry are dropped. A state listed more than once in
/// the lookup uses its first abbreviation.
pub fn sales_by_location(orders: &[OrderRecord], states: &[StateLookup]) -> Vec<StateSales> {
    let lookup = abbreviation_index(states);

    sales_by_state(orders)
        .into_iter()
        .filter_map(|total| {
            lookup.get(total.key.as_str()).map(|abbreviation| StateSales {
                abbreviation: (*abbreviation).to_string(),
                state: total.key,
                sales: total.sales,
            })
        })
        .collect()
}

/// Distinct order states that have no lookup entry, ordered by name.
pub fn unmatched_states(orders: &[OrderRecord], states: &[StateLookup]) -> Vec<String> {
    let lookup = abbreviation_index(states);

    sales_by_state(orders)
        .into_iter()
        .filter(|total| !lookup.contains_key(total.key.as_str()))
        .map(|total| total.key)
        .collect()
}

/// Sales per customer segment, each total rounded to one decimal.
pub fn sales_by_segment(orders: &[OrderRecord]) -> Vec<GroupTotal> {
    group_sales(orders, |order| order.segment.as_str())
        .into_iter()
        .map(|total| GroupTotal {
            sales: round_one(total.sales),
            ..total
        })
        .collect()
}

/// Sales per product category.
pub fn sales_by_category(orders: &[OrderRecord]) -> Vec<GroupTotal> {
    group_sales(orders, |order| order.category.as_str())
}

/// Sales per region for each known ship mode, in `ShipMode::ALL` order.
///
/// Rows whose ship mode is not an exact known label are skipped. A mode with
/// no rows still appears, with no regions.
pub fn sales_by_ship_mode(orders: &[OrderRecord]) -> Vec<ShipModeBreakdown> {
    let mut per_mode: BTreeMap<ShipMode, BTreeMap<&str, f64>> = ShipMode::ALL
        .into_iter()
        .map(|mode| (mode, BTreeMap::new()))
        .collect();

    for order in orders {
        let Some(mode) = ShipMode::from_label(&order.ship_mode) else {
            continue;
        };
        if let Some(regions) = per_mode.get_mut(&mode) {
            *regions.entry(order.region.as_str()).or_insert(0.0) += order.sales;
        }
    }

    per_mode
        .into_iter()
        .map(|(ship_mode, regions)| ShipModeBreakdown {
            ship_mode,
            regions: regions
                .into_iter()
                .map(|(region, sales)| GroupTotal {
                    key: region.to_string(),
                    sales,
                })
                .collect(),
        })
        .collect()
}

/// Rows carrying a customer id.
pub fn customer_record_count(orders: &[OrderRecord]) -> u64 {
    orders
        .iter()
        .filter(|order| !order.customer_id.trim().is_empty())
        .count() as u64
}

/// Earliest and latest order date, `None` for an empty table.
pub fn order_date_range(orders: &[OrderRecord]) -> Option<DateRange> {
    let first = orders.iter().map(|order| order.order_date).min()?;
    let last = orders.iter().map(|order| order.order_date).max()?;
    Some(DateRange { first, last })
}

/// Rows whose ship date precedes their order date.
pub fn ship_before_order_count(orders: &[OrderRecord]) -> u64 {
    orders
        .iter()
        .filter(|order| order.ships_before_order())
        .count() as u64
}

/// Sum sales by a string key, ordered by key.
fn group_sales<'a, F>(orders: &'a [OrderRecord], key: F) -> Vec<GroupTotal>
where
    F: Fn(&'a OrderRecord) -> &'a str,
{
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for order in orders {
        *groups.entry(key(order)).or_insert(0.0) += order.sales;
    }

    groups
        .into_iter()
        .map(|(key, sales)| GroupTotal {
            key: key.to_string(),
            sales,
        })
        .collect()
}

/// State name to abbreviation, first entry wins.
fn abbreviation_index(states: &[StateLookup]) -> HashMap<&str, &str> {
    let mut index = HashMap::with_capacity(states.len());
    for lookup in states {
        index
            .entry(lookup.state.as_str())
            .or_insert(lookup.abbreviation.as_str());
    }
    index
}
