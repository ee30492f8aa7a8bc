//! Income display formatting

use tabled::Tabled;

use super::{date, money, render_table, truncate};
use crate::config::settings::Settings;
use crate::models::Income;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Recurring")]
    recurring: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

pub fn format_income_list(incomes: &[Income], settings: &Settings) -> String {
    if incomes.is_empty() {
        return "No income recorded.\n".to_string();
    }

    let rows = incomes
        .iter()
        .map(|i| IncomeRow {
            id: i.id.to_string(),
            date: date(settings, i.date),
            category: format!("{} {}", i.category.icon(), i.category),
            description: truncate(&i.description, 40),
            recurring: if i.is_recurring { "yes" } else { "" },
            amount: money(settings, i.amount),
        })
        .collect();

    render_table(rows, &[5])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeCategory, IncomeId, Money};
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_income_list() {
        let income = Income {
            id: IncomeId::new(),
            amount: Money::from_dollars(3000),
            category: IncomeCategory::Salary,
            description: "October pay".into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            is_recurring: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let output = format_income_list(&[income], &Settings::default());
        assert!(output.contains("October pay"));
        assert!(output.contains("$3000.00"));
        assert!(output.contains("yes"));
    }
}
