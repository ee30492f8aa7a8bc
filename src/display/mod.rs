//! Display formatting for terminal output
//!
//! Turns collections and reports into tables and text blocks. Amounts use
//! the configured currency symbol and dates the configured display format.

pub mod budget;
pub mod expense;
pub mod income;
pub mod report;
pub mod savings;

pub use budget::{format_budget_list, format_budget_status};
pub use expense::{format_expense_details, format_expense_list};
pub use income::format_income_list;
pub use report::{format_planning, format_summary};
pub use savings::format_savings_list;

use chrono::NaiveDate;
use std::fmt::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::form::FORM_DATE_FORMAT;
use crate::models::Money;

/// Format an amount with the configured currency symbol
pub fn money(settings: &Settings, amount: Money) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format a date with the configured display format
///
/// Falls back to `YYYY-MM-DD` when the configured format cannot be rendered.
pub fn date(settings: &Settings, date: NaiveDate) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(&settings.date_format)) {
        Ok(()) => out,
        Err(_) => date.format(FORM_DATE_FORMAT).to_string(),
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Render rows as a table, right-aligning the given columns
pub(crate) fn render_table<R: Tabled>(rows: Vec<R>, numeric_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    for &column in numeric_columns {
        table.with(Modify::new(Columns::single(column)).with(Alignment::right()));
    }
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_uses_configured_symbol() {
        let mut settings = Settings::default();
        assert_eq!(money(&settings, Money::from_cents(123456)), "$1234.56");

        settings.currency_symbol = "€".into();
        assert_eq!(money(&settings, Money::from_cents(-50)), "-€0.50");
    }

    #[test]
    fn test_date_uses_configured_format() {
        let settings = Settings::default();
        let d = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        assert_eq!(date(&settings, d), "Oct 05, 2026");
    }

    #[test]
    fn test_bad_date_format_falls_back() {
        let settings: Settings = serde_json::from_str(r#"{"date_format": "%Q"}"#).unwrap();
        let d = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        assert_eq!(date(&settings, d), "2026-10-05");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(7.34), "7.3%");
        assert_eq!(format_percentage(80.0), "80%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "   ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 10), "a longe...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
