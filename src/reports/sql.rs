//! The fixed report queries.
//!
//! PostgreSQL dialect is assumed and must be preserved: interval
//! arithmetic drives the trailing 30-day window and `HAVING` filters
//! grouped aggregates. Identifier columns are cast to `bigint` and
//! currency columns to `float8` so every report loads into the record
//! types in [`super::rows`] regardless of the store's serial/numeric
//! column widths.

/// One row per sale joined to its customer, most recent first.
pub const SALES_BY_CUSTOMER: &str = "\
SELECT
    s.id::bigint AS sale_id,
    s.sale_date,
    c.name AS customer_name,
    s.total_value::float8 AS total_value
FROM sales s
JOIN customers c ON s.customer_id = c.id
ORDER BY s.sale_date DESC";

/// Products grouped with their category, kept only when total revenue
/// strictly exceeds 500 currency units.
pub const TOP_PRODUCTS_BY_REVENUE: &str = "\
SELECT
    p.name AS product_name,
    c.name AS category_name,
    SUM(si.quantity)::bigint AS total_quantity_sold,
    SUM(si.subtotal)::float8 AS total_revenue
FROM products p
JOIN categories c ON p.category_id = c.id
JOIN sale_items si ON p.id = si.product_id
GROUP BY p.id, p.name, c.name
HAVING SUM(si.subtotal) > 500
ORDER BY total_revenue DESC";

/// Sales whose value exceeds the average over the trailing 30 days.
///
/// The threshold is a moving value computed at query time, not stored.
pub const CUSTOMERS_ABOVE_AVERAGE: &str = "\
SELECT
    c.name AS customer_name,
    c.city,
    s.sale_date,
    s.total_value::float8 AS total_value
FROM customers c
JOIN sales s ON c.id = s.customer_id
WHERE s.total_value > (
    SELECT AVG(total_value)
    FROM sales
    WHERE sale_date >= CURRENT_DATE - INTERVAL '30 days'
)
ORDER BY s.total_value DESC";

/// Single-row scalar aggregates over all sales.
pub const OVERALL_METRICS: &str = "\
SELECT
    COUNT(DISTINCT s.id)::bigint AS sale_count,
    SUM(s.total_value)::float8 AS total_revenue,
    AVG(s.total_value)::float8 AS average_ticket,
    COUNT(DISTINCT c.id)::bigint AS customer_count
FROM sales s
JOIN customers c ON s.customer_id = c.id";

/// Item counts and revenue per category with at least one sold item.
pub const REVENUE_BY_CATEGORY: &str = "\
SELECT
    cat.name AS category_name,
    COUNT(si.id)::bigint AS item_count,
    SUM(si.subtotal)::float8 AS category_revenue
FROM categories cat
JOIN products p ON cat.id = p.category_id
JOIN sale_items si ON p.id = si.product_id
GROUP BY cat.id, cat.name
ORDER BY category_revenue DESC";

/// Top ten customers by accumulated sale value.
pub const TOP_CUSTOMERS_BY_VALUE: &str = "\
SELECT
    c.name AS customer_name,
    c.city,
    COUNT(s.id)::bigint AS purchase_count,
    SUM(s.total_value)::float8 AS total_spent
FROM customers c
JOIN sales s ON c.id = s.customer_id
GROUP BY c.id, c.name, c.city
ORDER BY total_spent DESC
LIMIT 10";
