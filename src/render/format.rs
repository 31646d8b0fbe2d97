//! Currency and date formatting shared by charts, tables, and metric cards.
//!
//! These conventions are a boundary contract with the page: two-decimal,
//! comma-grouped amounts behind the local currency symbol, and day-first
//! dates.

use chrono::NaiveDate;

pub const CURRENCY_SYMBOL: &str = "R$";

/// Format an amount as e.g. `R$ 1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    // Round to cents before splitting, so 0.005 carries instead of truncating
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{} {}{}.{:02}", CURRENCY_SYMBOL, sign, grouped, frac)
}

/// Parse a formatted currency string back to its numeric value.
///
/// Inverse of [`format_currency`] (strip symbol and grouping); returns
/// `None` when the text is not a currency string this crate produced.
pub fn parse_currency(text: &str) -> Option<f64> {
    let stripped = text.trim().strip_prefix(CURRENCY_SYMBOL)?;
    stripped.trim().replace(',', "").parse::<f64>().ok()
}

/// Dates render day-first: `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
