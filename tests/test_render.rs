//! Presentation adapter tests: no-data substitution, detail-table caps,
//! cell formatting, and full-page rendering from a fixture snapshot.

use chrono::{Local, NaiveDate};
use salesboard::config::DashboardMode;
use salesboard::render::{self, Artifact};
use salesboard::reports::rows::{
    AboveAverageSale, CategoryRevenue, CustomerRanking, OverallMetrics, SaleWithCustomer,
};
use salesboard::reports::DashboardSnapshot;
use salesboard::server;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn sale(id: i64, d: u32, customer: &str, value: f64) -> SaleWithCustomer {
    SaleWithCustomer {
        sale_id: id,
        sale_date: day(d),
        customer_name: customer.to_string(),
        total_value: value,
    }
}

fn ranking(name: &str, spent: f64) -> CustomerRanking {
    CustomerRanking {
        customer_name: name.to_string(),
        city: "Springfield".to_string(),
        purchase_count: 3,
        total_spent: spent,
    }
}

#[test]
fn test_empty_results_become_no_data_artifacts() {
    assert!(render::category_pie(&[]).is_no_data());
    assert!(render::product_revenue_bar(&[]).is_no_data());
    assert!(render::top_customers_bar(&[]).is_no_data());
    assert!(render::above_average_table(&[]).is_no_data());
    assert!(render::recent_sales_table(&[]).is_no_data());
    assert!(render::customer_ranking_table(&[]).is_no_data());
}

#[test]
fn test_category_pie_keeps_labels_and_values_aligned() {
    let rows = vec![
        CategoryRevenue {
            category_name: "Electronics".to_string(),
            item_count: 12,
            category_revenue: 3200.0,
        },
        CategoryRevenue {
            category_name: "Books".to_string(),
            item_count: 4,
            category_revenue: 180.5,
        },
    ];

    match render::category_pie(&rows) {
        Artifact::Chart(chart) => {
            assert_eq!(chart.labels, vec!["Electronics", "Books"]);
            assert_eq!(chart.values, vec![3200.0, 180.5]);
        }
        other => panic!("expected chart, got {:?}", other),
    }
}

#[test]
fn test_top_customers_bar_plots_total_spent() {
    let rows = vec![ranking("Alice", 900.0), ranking("Bob", 450.0)];

    match render::top_customers_bar(&rows) {
        Artifact::Chart(chart) => {
            assert_eq!(chart.labels, vec!["Alice", "Bob"]);
            assert_eq!(chart.values, vec![900.0, 450.0]);
        }
        other => panic!("expected chart, got {:?}", other),
    }
}

#[test]
fn test_detail_tables_cap_at_eight_rows() {
    let rows: Vec<SaleWithCustomer> = (1..=12)
        .map(|i| sale(i, (i % 28 + 1) as u32, "Customer", 100.0 * i as f64))
        .collect();

    match render::recent_sales_table(&rows) {
        Artifact::Table(table) => assert_eq!(table.rows.len(), 8),
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_table_cells_are_preformatted() {
    let rows = vec![AboveAverageSale {
        customer_name: "Alice".to_string(),
        city: "Springfield".to_string(),
        sale_date: day(5),
        total_value: 1234.5,
    }];

    match render::above_average_table(&rows) {
        Artifact::Table(table) => {
            assert_eq!(table.headers, vec!["Customer", "City", "Date", "Value"]);
            assert_eq!(
                table.rows[0],
                vec!["Alice", "Springfield", "05/06/2024", "R$ 1,234.50"]
            );
        }
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_ranking_table_keeps_all_rows() {
    // The query caps the ranking at ten; the table shows everything it got
    let rows: Vec<CustomerRanking> = (0..10)
        .map(|i| ranking(&format!("Customer {}", i), 1000.0 - i as f64))
        .collect();

    match render::customer_ranking_table(&rows) {
        Artifact::Table(table) => assert_eq!(table.rows.len(), 10),
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_metric_cards_format_zero_metrics() {
    let cards = render::metric_cards(&OverallMetrics {
        sale_count: 0,
        total_revenue: 0.0,
        average_ticket: 0.0,
        customer_count: 0,
    });

    assert_eq!(cards.total_revenue, "R$ 0.00");
    assert_eq!(cards.average_ticket, "R$ 0.00");
    assert_eq!(cards.sale_count, "0");
    assert_eq!(cards.customer_count, "0");
}

#[test]
fn test_dashboard_page_renders_fixture_snapshot() {
    let templates = server::load_templates().expect("templates should register");

    let snapshot = DashboardSnapshot {
        generated_at: Local::now(),
        sales: vec![sale(1, 10, "Alice", 250.0), sale(2, 9, "Bob", 90.0)],
        top_products: vec![],
        above_average: vec![],
        metrics: OverallMetrics {
            sale_count: 2,
            total_revenue: 340.0,
            average_ticket: 170.0,
            customer_count: 2,
        },
        categories: vec![CategoryRevenue {
            category_name: "Electronics".to_string(),
            item_count: 5,
            category_revenue: 340.0,
        }],
        top_customers: vec![ranking("Alice", 250.0)],
    };

    let html = render::dashboard_page(&templates, &snapshot, DashboardMode::Static)
        .expect("page should render");

    assert!(html.contains("Sales Dashboard"));
    assert!(html.contains("R$ 340.00"), "metric card total revenue");
    assert!(html.contains("Alice"));
    // Empty reports render the placeholder, not an empty widget shell
    assert!(html.contains(render::NO_DATA_MESSAGE));
}

#[test]
fn test_dashboard_page_renders_fully_empty_snapshot() {
    let templates = server::load_templates().expect("templates should register");

    let snapshot = DashboardSnapshot {
        generated_at: Local::now(),
        sales: vec![],
        top_products: vec![],
        above_average: vec![],
        metrics: OverallMetrics::from_rows(vec![]),
        categories: vec![],
        top_customers: vec![],
    };

    let html = render::dashboard_page(&templates, &snapshot, DashboardMode::Interactive)
        .expect("an empty store must still render a page");

    assert!(html.contains("R$ 0.00"));
    assert!(html.contains(render::NO_DATA_MESSAGE));
    assert!(html.contains("interactive mode"));
}
