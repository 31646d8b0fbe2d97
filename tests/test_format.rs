//! Formatting boundary contract: two-decimal comma-grouped currency
//! behind the local symbol, day-first dates, and a lossless round-trip
//! back to the numeric value.

use chrono::NaiveDate;
use salesboard::render::format::{format_currency, format_date, parse_currency};

#[test]
fn test_currency_grouping_and_decimals() {
    assert_eq!(format_currency(0.0), "R$ 0.00");
    assert_eq!(format_currency(5.0), "R$ 5.00");
    assert_eq!(format_currency(999.99), "R$ 999.99");
    assert_eq!(format_currency(1234.5), "R$ 1,234.50");
    assert_eq!(format_currency(1234567.891), "R$ 1,234,567.89");
}

#[test]
fn test_currency_rounds_to_cents() {
    assert_eq!(format_currency(500.005), "R$ 500.01");
    assert_eq!(format_currency(0.004), "R$ 0.00");
}

#[test]
fn test_negative_currency() {
    assert_eq!(format_currency(-1234.5), "R$ -1,234.50");
    assert_eq!(parse_currency("R$ -1,234.50"), Some(-1234.5));
}

#[test]
fn test_currency_round_trip() {
    // Parsing back (strip symbol and grouping) must recover the value to
    // two decimal places
    for value in [0.0, 0.01, 1.0, 499.99, 500.0, 500.01, 1234.56, 98765432.1] {
        let formatted = format_currency(value);
        let parsed = parse_currency(&formatted)
            .unwrap_or_else(|| panic!("failed to parse back '{}'", formatted));
        assert!(
            (parsed - value).abs() < 0.005,
            "round trip drifted: {} -> '{}' -> {}",
            value,
            formatted,
            parsed
        );
    }
}

#[test]
fn test_parse_rejects_foreign_text() {
    assert_eq!(parse_currency("1,234.50"), None, "missing symbol");
    assert_eq!(parse_currency("R$ abc"), None);
    assert_eq!(parse_currency(""), None);
}

#[test]
fn test_date_renders_day_first() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    assert_eq!(format_date(date), "07/03/2024");
}
