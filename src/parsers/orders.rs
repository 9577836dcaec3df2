//! Superstore order export parser.
//!
//! Deserializes the order table (one line-item per row) into `OrderRecord`s.
//! Required columns missing from the header, non-numeric amounts and
//! malformed dates all fail the whole table.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::order::OrderRecord;
use crate::parsers::{parse_date, reader_with_normalized_headers, Parser};

/// Columns every order export must carry, after header normalization.
const REQUIRED_COLUMNS: &[&[&str]] = &[
    &["order_id"],
    &["order_date"],
    &["ship_date"],
    &["ship_mode"],
    &["customer_id"],
    &["segment"],
    &["city"],
    &["state"],
    &["region"],
    &["product_id"],
    &["category"],
    &["sub-category", "sub_category"],
    &["sales"],
    &["quantity"],
    &["discount"],
    &["profit"],
];

/// Parser for the order table.
#[derive(Debug, Default)]
pub struct OrdersParser;

impl OrdersParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for OrdersParser {
    type Record = OrderRecord;

    fn parse(&self, data: &[u8]) -> Result<Vec<OrderRecord>, AppError> {
        let mut reader =
            reader_with_normalized_headers(data, self.table(), self.required_columns())?;
        let mut orders = Vec::new();

        for (i, result) in reader.deserialize::<OrderRow>().enumerate() {
            // Header is line 1.
            let line = i + 2;
            let row = result
                .map_err(|e| AppError::Load(format!("{} line {line}: {e}", self.table())))?;
            orders.push(self.convert_row(row, line)?);
        }

        Ok(orders)
    }

    fn table(&self) -> &str {
        "orders"
    }

    fn required_columns(&self) -> &'static [&'static [&'static str]] {
        REQUIRED_COLUMNS
    }
}

/// Order row as it appears after header normalization.
#[derive(Debug, Deserialize)]
struct OrderRow {
    #[serde(default)]
    row_id: Option<String>,
    order_id: String,
    order_date: String,
    ship_date: String,
    ship_mode: String,
    customer_id: String,
    #[serde(default)]
    customer_name: Option<String>,
    segment: String,
    #[serde(default)]
    country: Option<String>,
    city: String,
    state: String,
    #[serde(default)]
    postal_code: Option<String>,
    region: String,
    product_id: String,
    category: String,
    #[serde(rename = "sub-category", alias = "sub_category")]
    sub_category: String,
    #[serde(default)]
    product_name: Option<String>,
    sales: f64,
    quantity: f64,
    discount: f64,
    profit: f64,
}

impl OrdersParser {
    fn convert_row(&self, row: OrderRow, line: usize) -> Result<OrderRecord, AppError> {
        let order_date = self.date_field(&row.order_date, "order_date", line)?;
        let ship_date = self.date_field(&row.ship_date, "ship_date", line)?;
        for (column, value) in [
            ("sales", row.sales),
            ("quantity", row.quantity),
            ("discount", row.discount),
            ("profit", row.profit),
        ] {
            if !value.is_finite() {
                return Err(AppError::Load(format!(
                    "{} line {line}: invalid {column} '{value}'",
                    self.table()
                )));
            }
        }

        Ok(OrderRecord {
            row_id: row.row_id,
            order_id: row.order_id,
            order_date,
            ship_date,
            ship_mode: row.ship_mode,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            segment: row.segment,
            country: row.country,
            city: row.city,
            state: row.state,
            postal_code: row.postal_code,
            region: row.region,
            product_id: row.product_id,
            category: row.category,
            sub_category: row.sub_category,
            product_name: row.product_name,
            sales: row.sales,
            quantity: row.quantity,
            discount: row.discount,
            profit: row.profit,
        })
    }

    fn date_field(
        &self,
        value: &str,
        column: &str,
        line: usize,
    ) -> Result<chrono::NaiveDate, AppError> {
        parse_date(value).ok_or_else(|| {
            AppError::Load(format!(
                "{} line {line}: invalid {column} '{value}'",
                self.table()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const HEADER: &str = "Row ID,Order ID,Order Date,Ship Date,Ship Mode,Customer ID,Customer Name,Segment,Country,City,State,Postal Code,Region,Product ID,Category,Sub-Category,Product Name,Sales,Quantity,Discount,Profit";

    #[test]
    fn parse_fixture_finds_all_rows() {
        let parser = OrdersParser::new();
        let data = include_bytes!("../../tests/fixtures/orders_sample.csv");
        let orders = parser.parse(data).unwrap();
        assert_eq!(orders.len(), 9);
        assert_eq!(orders[0].order_id, "CA-2016-152156");
        assert_eq!(orders[0].sub_category, "Bookcases");
        assert_eq!(
            orders[0].order_date,
            NaiveDate::from_ymd_opt(2016, 11, 8).unwrap()
        );
    }

    #[test]
    fn quantity_is_read_as_real() {
        let parser = OrdersParser::new();
        let data = include_bytes!("../../tests/fixtures/orders_sample.csv");
        let orders = parser.parse(data).unwrap();
        assert_eq!(orders[0].quantity, 2.0);
    }

    #[test]
    fn lower_case_underscore_headers_are_accepted() {
        let data = "order_id,order_date,ship_date,ship_mode,customer_id,segment,city,state,region,product_id,category,sub_category,sales,quantity,discount,profit\n\
                    O-1,2023-01-15,2023-01-18,First Class,C-1,Consumer,Los Angeles,California,West,P-1,Furniture,Chairs,100,1,0,10\n";
        let orders = OrdersParser::new().parse(data.as_bytes()).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].row_id, None);
        assert_eq!(orders[0].customer_name, None);
        assert_eq!(orders[0].sub_category, "Chairs");
    }

    #[test]
    fn malformed_date_fails_the_table() {
        let data = format!(
            "{HEADER}\n1,O-1,31/31/2016,11/11/2016,Second Class,C-1,Ann,Consumer,United States,Henderson,Kentucky,42420,South,P-1,Furniture,Bookcases,Shelf,261.96,2,0,41.91\n"
        );
        let err = OrdersParser::new().parse(data.as_bytes()).unwrap_err();
        assert!(err.is_load_failure());
        assert!(err.to_string().contains("order_date"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn missing_required_column_fails_the_table() {
        let data = "Order ID,Order Date\nO-1,11/8/2016\n";
        let err = OrdersParser::new().parse(data.as_bytes()).unwrap_err();
        assert!(err.is_load_failure());
        assert!(err.to_string().contains("missing required columns: ship_date"));
    }

    #[test]
    fn header_only_with_unknown_columns_fails() {
        let err = OrdersParser::new().parse(b"foo,bar\n").unwrap_err();
        assert!(err.is_load_failure());
        let message = err.to_string();
        assert!(message.starts_with("Load error: orders: missing required columns: order_id"));
        assert!(message.contains("sub-category"));
        assert!(message.ends_with("profit"));
    }

    #[test]
    fn empty_source_fails_the_table() {
        let err = OrdersParser::new().parse(b"").unwrap_err();
        assert!(err.is_load_failure());
        assert!(err.to_string().contains("orders: missing required columns"));
    }

    #[test]
    fn non_finite_amounts_fail_the_table() {
        let cases = [
            ("NaN", "41.91", "sales"),
            ("261.96", "inf", "profit"),
            ("-inf", "0", "sales"),
        ];
        for (sales, profit, column) in cases {
            let data = format!(
                "{HEADER}\n1,O-1,11/8/2016,11/11/2016,Second Class,C-1,Ann,Consumer,United States,Henderson,Kentucky,42420,South,P-1,Furniture,Bookcases,Shelf,{sales},2,0,{profit}\n"
            );
            let err = OrdersParser::new().parse(data.as_bytes()).unwrap_err();
            assert!(err.is_load_failure());
            let message = err.to_string();
            assert!(message.contains("orders line 2"), "{message}");
            assert!(message.contains(&format!("invalid {column}")), "{message}");
        }
    }

    #[test]
    fn non_numeric_sales_fails_the_table() {
        let data = format!(
            "{HEADER}\n1,O-1,11/8/2016,11/11/2016,Second Class,C-1,Ann,Consumer,United States,Henderson,Kentucky,42420,South,P-1,Furniture,Bookcases,Shelf,lots,2,0,41.91\n"
        );
        assert!(OrdersParser::new().parse(data.as_bytes()).is_err());
    }

    #[test]
    fn header_only_yields_empty_table() {
        let orders = OrdersParser::new().parse(HEADER.as_bytes()).unwrap();
        assert!(orders.is_empty());
    }
}
