use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One line-item from the order export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub row_id: Option<String>,
    pub order_id: String,
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub ship_mode: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub segment: String,
    pub country: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: Option<String>,
    pub region: String,
    pub product_id: String,
    pub category: String,
    pub sub_category: String,
    pub product_name: Option<String>,
    pub sales: f64,
    pub quantity: f64,
    pub discount: f64,
    pub profit: f64,
}

impl OrderRecord {
    /// Value of a summable column on this row.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sales => self.sales,
            Metric::Discount => self.discount,
            Metric::Profit => self.profit,
            Metric::Quantity => self.quantity,
        }
    }

    /// Whether the row ships before it was ordered.
    pub fn ships_before_order(&self) -> bool {
        self.ship_date < self.order_date
    }
}

/// Summable numeric columns of the order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Sales,
    Discount,
    Profit,
    Quantity,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Sales,
        Metric::Discount,
        Metric::Profit,
        Metric::Quantity,
    ];

    /// Normalized column name.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Sales => "sales",
            Metric::Discount => "discount",
            Metric::Profit => "profit",
            Metric::Quantity => "quantity",
        }
    }

    /// Card title on the overview page.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Sales => "Total Sales",
            Metric::Discount => "Total Discount",
            Metric::Profit => "Total Profit",
            Metric::Quantity => "Total Quantity",
        }
    }

    /// Whether the card value is a currency amount.
    pub fn is_currency(self) -> bool {
        !matches!(self, Metric::Quantity)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = AppError;

    /// Accepts raw header spellings ("Sales", " profit ") the same way the
    /// table parsers normalize headers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let column = crate::parsers::normalize_header(s);
        Metric::ALL
            .into_iter()
            .find(|m| m.column() == column)
            .ok_or(AppError::MissingField(column))
    }
}

/// Shipping service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipMode {
    #[serde(rename = "First Class")]
    FirstClass,
    #[serde(rename = "Standard Class")]
    StandardClass,
    #[serde(rename = "Second Class")]
    SecondClass,
    #[serde(rename = "Same Day")]
    SameDay,
}

impl ShipMode {
    /// Every tier, in breakdown order.
    pub const ALL: [ShipMode; 4] = [
        ShipMode::FirstClass,
        ShipMode::StandardClass,
        ShipMode::SecondClass,
        ShipMode::SameDay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShipMode::FirstClass => "First Class",
            ShipMode::StandardClass => "Standard Class",
            ShipMode::SecondClass => "Second Class",
            ShipMode::SameDay => "Same Day",
        }
    }

    /// Exact label match; anything else is not a known tier.
    pub fn from_label(label: &str) -> Option<Self> {
        ShipMode::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for ShipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_from_str_normalizes() {
        assert_eq!("sales".parse::<Metric>().unwrap(), Metric::Sales);
        assert_eq!(" Profit ".parse::<Metric>().unwrap(), Metric::Profit);
        assert_eq!("QUANTITY".parse::<Metric>().unwrap(), Metric::Quantity);
    }

    #[test]
    fn metric_from_str_rejects_unknown_column() {
        let err = "ship_date".parse::<Metric>().unwrap_err();
        assert!(matches!(err, AppError::MissingField(ref c) if c == "ship_date"));
    }

    #[test]
    fn ship_mode_labels_roundtrip() {
        for mode in ShipMode::ALL {
            assert_eq!(ShipMode::from_label(mode.label()), Some(mode));
        }
        assert_eq!(ShipMode::from_label("first class"), None);
        assert_eq!(ShipMode::from_label("Overnight"), None);
    }

    #[test]
    fn ship_mode_serializes_as_label() {
        let json = serde_json::to_value(ShipMode::SameDay).unwrap();
        assert_eq!(json, "Same Day");
    }

    #[test]
    fn quantity_is_not_currency() {
        assert!(Metric::Sales.is_currency());
        assert!(!Metric::Quantity.is_currency());
    }
}
