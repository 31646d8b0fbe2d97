//! Report catalog: the fixed set of analytical queries.
//!
//! Each report is a pure function of the store's current contents via one
//! fixed query. The catalog owns the connector and is the single
//! implementation shared by both operating modes; callers choose when to
//! run it, never what it computes.

pub mod rows;
pub mod sql;

use chrono::{DateTime, Local};

use crate::connector::Connector;

pub use rows::{
    AboveAverageSale, CategoryRevenue, CustomerRanking, MetricsRow, OverallMetrics,
    ProductRevenue, SaleWithCustomer,
};

/// The six named reports plus the derived metrics computation.
pub struct ReportCatalog {
    connector: Connector,
}

impl ReportCatalog {
    pub fn new(connector: Connector) -> Self {
        ReportCatalog { connector }
    }

    /// Every sale with its customer, most recent first.
    pub fn sales_by_customer(&self) -> Vec<SaleWithCustomer> {
        self.connector.load(sql::SALES_BY_CUSTOMER)
    }

    /// Products whose total revenue strictly exceeds 500, best first.
    pub fn top_products_by_revenue(&self) -> Vec<ProductRevenue> {
        self.connector.load(sql::TOP_PRODUCTS_BY_REVENUE)
    }

    /// Sales above the trailing 30-day average, highest value first.
    pub fn customers_above_average(&self) -> Vec<AboveAverageSale> {
        self.connector.load(sql::CUSTOMERS_ABOVE_AVERAGE)
    }

    /// The four scalar aggregates over all sales; zeros when the store
    /// is empty.
    pub fn overall_metrics(&self) -> OverallMetrics {
        OverallMetrics::from_rows(self.connector.load(sql::OVERALL_METRICS))
    }

    /// Item count and revenue per category with sold items, by revenue.
    pub fn revenue_by_category(&self) -> Vec<CategoryRevenue> {
        self.connector.load(sql::REVENUE_BY_CATEGORY)
    }

    /// The ten customers with the highest accumulated sale value.
    pub fn top_customers_by_value(&self) -> Vec<CustomerRanking> {
        self.connector.load(sql::TOP_CUSTOMERS_BY_VALUE)
    }

    /// Run the full catalog and capture the results with a timestamp.
    pub fn snapshot(&self) -> DashboardSnapshot {
        tracing::info!("computing dashboard snapshot");

        let snapshot = DashboardSnapshot {
            generated_at: Local::now(),
            sales: self.sales_by_customer(),
            top_products: self.top_products_by_revenue(),
            above_average: self.customers_above_average(),
            metrics: self.overall_metrics(),
            categories: self.revenue_by_category(),
            top_customers: self.top_customers_by_value(),
        };

        tracing::info!(
            "snapshot ready: {} sales, {} products, {} categories",
            snapshot.sales.len(),
            snapshot.top_products.len(),
            snapshot.categories.len()
        );

        snapshot
    }
}

/// One full run of the catalog.
///
/// Read-only once constructed; in static mode a single snapshot backs the
/// page for the whole process lifetime.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Local>,
    pub sales: Vec<SaleWithCustomer>,
    pub top_products: Vec<ProductRevenue>,
    pub above_average: Vec<AboveAverageSale>,
    pub metrics: OverallMetrics,
    pub categories: Vec<CategoryRevenue>,
    pub top_customers: Vec<CustomerRanking>,
}
