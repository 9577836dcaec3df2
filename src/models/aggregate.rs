//! Derived, read-only aggregate results served to the dashboard.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::models::order::{Metric, ShipMode};

/// Calendar month key, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Truncate a date to its month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Summed sales for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySales {
    pub month: YearMonth,
    pub sales: f64,
}

/// Summed sales for a state that has a lookup entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSales {
    pub state: String,
    pub abbreviation: String,
    pub sales: f64,
}

/// Summed metric for one group key (segment, category, region).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub sales: f64,
}

/// Sales per region for a single ship mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipModeBreakdown {
    pub ship_mode: ShipMode,
    pub regions: Vec<GroupTotal>,
}

/// Scalar total rendered as an overview card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalCard {
    pub metric: Metric,
    pub title: String,
    pub value: f64,
    pub display: String,
}

/// First and last order dates in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_month_orders_chronologically() {
        let mut months = vec![
            YearMonth::new(2023, 2),
            YearMonth::new(2022, 12),
            YearMonth::new(2023, 1),
        ];
        months.sort();
        assert_eq!(
            months,
            vec![
                YearMonth::new(2022, 12),
                YearMonth::new(2023, 1),
                YearMonth::new(2023, 2),
            ]
        );
    }

    #[test]
    fn year_month_serializes_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let ym = YearMonth::from_date(date);
        assert_eq!(ym.to_string(), "2023-01");
        assert_eq!(serde_json::to_value(ym).unwrap(), "2023-01");
    }
}
