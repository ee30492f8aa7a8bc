//! Budget display formatting

use tabled::Tabled;

use super::{format_bar, format_percentage, money, render_table};
use crate::config::settings::Settings;
use crate::models::{Budget, StatusTier};
use crate::reports::BudgetStatus;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly limit")]
    amount: String,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budgeted")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn format_budget_list(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.to_string(),
            category: format!("{} {}", b.category.icon(), b.category),
            amount: money(settings, b.amount),
        })
        .collect();

    render_table(rows, &[2])
}

fn tier_marker(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Safe => "OK",
        StatusTier::Warning => "75%",
        StatusTier::Danger => "90%",
        StatusTier::Exceeded => "OVER",
    }
}

/// Format budget statuses, one row per budget
pub fn format_budget_status(statuses: &[BudgetStatus], settings: &Settings) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = statuses
        .iter()
        .map(|s| StatusRow {
            category: format!("{} {}", s.category.icon(), s.category),
            budgeted: money(settings, s.budgeted),
            spent: money(settings, s.spent),
            remaining: money(settings, s.remaining),
            used: format_percentage(s.percentage),
            bar: format_bar(s.percentage, 100.0, 10),
            status: format!("{} {}", tier_marker(s.status), s.status.message()),
        })
        .collect();

    render_table(rows, &[1, 2, 3, 4])
}
