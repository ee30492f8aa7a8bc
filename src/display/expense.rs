//! Expense display formatting

use tabled::Tabled;

use super::{date, money, render_table, truncate};
use crate::config::settings::Settings;
use crate::models::{Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table with a total line
pub fn format_expense_list(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: date(settings, e.date),
            category: format!("{} {}", e.category.icon(), e.category),
            description: truncate(&e.description, 40),
            amount: money(settings, e.amount),
        })
        .collect();

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut output = render_table(rows, &[4]);
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        money(settings, total)
    ));
    output
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.description));
    output.push_str(&format!("  ID:          {}\n", expense.id.as_uuid()));
    output.push_str(&format!("  Amount:      {}\n", money(settings, expense.amount)));
    output.push_str(&format!(
        "  Category:    {} {}\n",
        expense.category.icon(),
        expense.category
    ));
    output.push_str(&format!("  Date:        {}\n", date(settings, expense.date)));
    output.push_str(&format!(
        "  Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "  Updated:     {}\n",
        expense.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
