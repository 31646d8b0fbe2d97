//! # Salesboard: Sales Analytics Dashboard
//!
//! Salesboard connects to a PostgreSQL store of sales, customers, products,
//! and categories, runs a fixed catalog of aggregate reports, and serves the
//! results as a single-page dashboard of charts and tables.
//!
//! All aggregation (sums, averages, grouping, ranking, thresholding) is
//! delegated to PostgreSQL through fixed SQL text; the crate marshals query
//! results into typed records and display artifacts.
//!
//! ## Operating modes
//!
//! - **Static**: all reports are computed once at startup and the rendered
//!   page is served unchanged for the lifetime of the process.
//! - **Interactive**: reports are recomputed synchronously on each page
//!   request.
//!
//! Both modes share one [`reports::ReportCatalog`]; the mode only selects
//! when the catalog runs.

// Configuration resolved from the environment
pub mod config;

// Data source connector (scoped connection per query)
pub mod connector;

// The fixed report catalog and its typed result records
pub mod reports;

// Presentation adapter: rows -> chart/table artifacts -> HTML
pub mod render;

// Axum hosting layer
pub mod server;

// Re-export key types
pub use config::{ConfigError, DashboardMode, DbSettings, ServerSettings};
pub use connector::{Connector, ConnectorError};
pub use render::{Artifact, ChartKind, ChartSpec, MetricCards, TableSpec};
pub use reports::{DashboardSnapshot, OverallMetrics, ReportCatalog};
