//! Typed result records, one per report.
//!
//! Each struct fixes the column set its report produces, so a missing or
//! renamed column surfaces as a load error at the connector boundary
//! instead of a rendering bug downstream.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date, Double, Nullable, Text};
use serde::Serialize;

/// One sale joined to its customer.
#[derive(Debug, Clone, PartialEq, QueryableByName, Serialize)]
pub struct SaleWithCustomer {
    #[diesel(sql_type = BigInt)]
    pub sale_id: i64,
    #[diesel(sql_type = Date)]
    pub sale_date: NaiveDate,
    #[diesel(sql_type = Text)]
    pub customer_name: String,
    #[diesel(sql_type = Double)]
    pub total_value: f64,
}

/// Per-product sales aggregate, joined to the product's category.
#[derive(Debug, Clone, PartialEq, QueryableByName, Serialize)]
pub struct ProductRevenue {
    #[diesel(sql_type = Text)]
    pub product_name: String,
    #[diesel(sql_type = Text)]
    pub category_name: String,
    #[diesel(sql_type = BigInt)]
    pub total_quantity_sold: i64,
    #[diesel(sql_type = Double)]
    pub total_revenue: f64,
}

/// A sale above the trailing 30-day average, with its customer.
#[derive(Debug, Clone, PartialEq, QueryableByName, Serialize)]
pub struct AboveAverageSale {
    #[diesel(sql_type = Text)]
    pub customer_name: String,
    #[diesel(sql_type = Text)]
    pub city: String,
    #[diesel(sql_type = Date)]
    pub sale_date: NaiveDate,
    #[diesel(sql_type = Double)]
    pub total_value: f64,
}

/// Raw one-row result of the overall metrics query.
///
/// The sums come back NULL when the sales table is empty; the nullable
/// fields keep that case a data case rather than a load error.
#[derive(Debug, Clone, PartialEq, QueryableByName)]
pub struct MetricsRow {
    #[diesel(sql_type = BigInt)]
    pub sale_count: i64,
    #[diesel(sql_type = Nullable<Double>)]
    pub total_revenue: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    pub average_ticket: Option<f64>,
    #[diesel(sql_type = BigInt)]
    pub customer_count: i64,
}

/// The four scalar aggregates shown as metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallMetrics {
    pub sale_count: i64,
    pub total_revenue: f64,
    pub average_ticket: f64,
    pub customer_count: i64,
}

impl OverallMetrics {
    /// Collapse the metrics query result into plain scalars.
    ///
    /// Zero rows or NULL aggregates (empty sales table) become zeros, so
    /// the metric cards always have a value to show.
    pub fn from_rows(rows: Vec<MetricsRow>) -> Self {
        match rows.into_iter().next() {
            Some(row) => OverallMetrics {
                sale_count: row.sale_count,
                total_revenue: row.total_revenue.unwrap_or(0.0),
                average_ticket: row.average_ticket.unwrap_or(0.0),
                customer_count: row.customer_count,
            },
            None => OverallMetrics {
                sale_count: 0,
                total_revenue: 0.0,
                average_ticket: 0.0,
                customer_count: 0,
            },
        }
    }
}

/// Per-category item count and revenue.
#[derive(Debug, Clone, PartialEq, QueryableByName, Serialize)]
pub struct CategoryRevenue {
    #[diesel(sql_type = Text)]
    pub category_name: String,
    #[diesel(sql_type = BigInt)]
    pub item_count: i64,
    #[diesel(sql_type = Double)]
    pub category_revenue: f64,
}

/// One entry of the top-customers ranking.
#[derive(Debug, Clone, PartialEq, QueryableByName, Serialize)]
pub struct CustomerRanking {
    #[diesel(sql_type = Text)]
    pub customer_name: String,
    #[diesel(sql_type = Text)]
    pub city: String,
    #[diesel(sql_type = BigInt)]
    pub purchase_count: i64,
    #[diesel(sql_type = Double)]
    pub total_spent: f64,
}
