//! Presentation adapter: report rows -> chart/table artifacts -> HTML.
//!
//! Every builder accepts an empty result without failing and substitutes
//! a fixed "no data" artifact, so a failed or empty query never produces
//! an empty chart or table shell.

pub mod format;
pub mod templates;

use serde::Serialize;
use serde_json::json;
use tera::{Context, Tera};

use crate::config::DashboardMode;
use crate::reports::rows::{
    AboveAverageSale, CategoryRevenue, CustomerRanking, OverallMetrics, ProductRevenue,
    SaleWithCustomer,
};
use crate::reports::DashboardSnapshot;
use format::{format_currency, format_date};

/// Placeholder text shown in place of an empty widget.
pub const NO_DATA_MESSAGE: &str = "No data available";

// Detail tables show only the leading rows
const DETAIL_TABLE_ROWS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

/// A renderable chart: parallel label/value series plus a kind the page
/// script maps onto the chart library.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A renderable table of preformatted cells.
#[derive(Debug, Clone, Serialize)]
pub struct TableSpec {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What a report becomes on the page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Artifact {
    Chart(ChartSpec),
    Table(TableSpec),
    NoData { title: String },
}

impl Artifact {
    fn no_data(title: &str) -> Self {
        Artifact::NoData {
            title: title.to_string(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Artifact::NoData { .. })
    }
}

/// Donut chart of revenue share per category.
pub fn category_pie(rows: &[CategoryRevenue]) -> Artifact {
    if rows.is_empty() {
        return Artifact::no_data("Revenue by Category");
    }

    Artifact::Chart(ChartSpec {
        title: "Revenue by Category".to_string(),
        kind: ChartKind::Pie,
        labels: rows.iter().map(|r| r.category_name.clone()).collect(),
        values: rows.iter().map(|r| r.category_revenue).collect(),
    })
}

/// Bar chart of the products above the revenue threshold.
pub fn product_revenue_bar(rows: &[ProductRevenue]) -> Artifact {
    if rows.is_empty() {
        return Artifact::no_data("Top Products by Revenue");
    }

    Artifact::Chart(ChartSpec {
        title: "Top Products by Revenue".to_string(),
        kind: ChartKind::Bar,
        labels: rows.iter().map(|r| r.product_name.clone()).collect(),
        values: rows.iter().map(|r| r.total_revenue).collect(),
    })
}

/// Bar chart of the customer ranking.
pub fn top_customers_bar(rows: &[CustomerRanking]) -> Artifact {
    if rows.is_empty() {
        return Artifact::no_data("Top 10 Customers by Value");
    }

    Artifact::Chart(ChartSpec {
        title: "Top 10 Customers by Value".to_string(),
        kind: ChartKind::Bar,
        labels: rows.iter().map(|r| r.customer_name.clone()).collect(),
        values: rows.iter().map(|r| r.total_spent).collect(),
    })
}

/// Detail table of sales above the trailing 30-day average.
pub fn above_average_table(rows: &[AboveAverageSale]) -> Artifact {
    if rows.is_empty() {
        return Artifact::no_data("Customers Above Average");
    }

    Artifact::Table(TableSpec {
        title: "Customers Above Average".to_string(),
        headers: vec![
            "Customer".to_string(),
            "City".to_string(),
            "Date".to_string(),
            "Value".to_string(),
        ],
        rows: rows
            .iter()
            .take(DETAIL_TABLE_ROWS)
            .map(|r| {
                vec![
                    r.customer_name.clone(),
                    r.city.clone(),
                    format_date(r.sale_date),
                    format_currency(r.total_value),
                ]
            })
            .collect(),
    })
}

/// Detail table of the most recent sales.
pub fn recent_sales_table(rows: &[SaleWithCustomer]) -> Artifact {
    if rows.is_empty() {
        return Artifact::no_data("Latest Sales");
    }

    Artifact::Table(TableSpec {
        title: "Latest Sales".to_string(),
        headers: vec![
            "Date".to_string(),
            "Customer".to_string(),
            "Value".to_string(),
        ],
        rows: rows
            .iter()
            .take(DETAIL_TABLE_ROWS)
            .map(|r| {
                vec![
                    format_date(r.sale_date),
                    r.customer_name.clone(),
                    format_currency(r.total_value),
                ]
            })
            .collect(),
    })
}

/// Full customer ranking table (the query already caps it at ten rows).
pub fn customer_ranking_table(rows: &[CustomerRanking]) -> Artifact {
    if rows.is_empty() {
        return Artifact::no_data("Customer Ranking");
    }

    Artifact::Table(TableSpec {
        title: "Customer Ranking".to_string(),
        headers: vec![
            "Customer".to_string(),
            "City".to_string(),
            "Purchases".to_string(),
            "Total Spent".to_string(),
        ],
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.customer_name.clone(),
                    r.city.clone(),
                    r.purchase_count.to_string(),
                    format_currency(r.total_spent),
                ]
            })
            .collect(),
    })
}

/// The four headline strings shown in the metric cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCards {
    pub total_revenue: String,
    pub sale_count: String,
    pub customer_count: String,
    pub average_ticket: String,
}

pub fn metric_cards(metrics: &OverallMetrics) -> MetricCards {
    MetricCards {
        total_revenue: format_currency(metrics.total_revenue),
        sale_count: metrics.sale_count.to_string(),
        customer_count: metrics.customer_count.to_string(),
        average_ticket: format_currency(metrics.average_ticket),
    }
}

/// Render the full dashboard page from one snapshot.
pub fn dashboard_page(
    templates: &Tera,
    snapshot: &DashboardSnapshot,
    mode: DashboardMode,
) -> tera::Result<String> {
    let charts = vec![
        category_pie(&snapshot.categories),
        product_revenue_bar(&snapshot.top_products),
        top_customers_bar(&snapshot.top_customers),
    ];

    let tables = vec![
        above_average_table(&snapshot.above_average),
        recent_sales_table(&snapshot.sales),
        customer_ranking_table(&snapshot.top_customers),
    ];

    let mut context = Context::new();
    context.insert("title", "Sales Dashboard");
    context.insert("mode", &mode.to_string());
    context.insert("no_data_message", NO_DATA_MESSAGE);
    context.insert("cards", &metric_cards(&snapshot.metrics));
    context.insert("charts", &charts);
    context.insert("tables", &tables);
    context.insert(
        "summary",
        &json!({
            "products_analyzed": snapshot.top_products.len(),
            "premium_customers": snapshot.above_average.len(),
            "categories_with_sales": snapshot.categories.len(),
            "ranked_customers": snapshot.top_customers.len(),
            "recorded_sales": snapshot.sales.len(),
            "generated_at": snapshot.generated_at.format("%d/%m/%Y %H:%M:%S").to_string(),
        }),
    );

    templates.render("index.html", &context)
}
