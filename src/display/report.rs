//! Report formatting for terminal output

use tabled::Tabled;

use super::{format_bar, format_percentage, money, render_table};
use crate::config::settings::Settings;
use crate::reports::{ExpenseSummary, PlanningOverview};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Spent")]
    amount: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the expense summary: headline figures, breakdown and trend
pub fn format_summary(summary: &ExpenseSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str("===============\n");
    output.push_str(&format!(
        "  Total spent:      {}\n",
        money(settings, summary.total_expenses)
    ));
    output.push_str(&format!(
        "  This month:       {}\n",
        money(settings, summary.monthly_expenses)
    ));
    output.push_str(&format!(
        "  Average expense:  {}\n",
        money(settings, summary.average_expense)
    ));
    output.push_str(&format!("  Expenses:         {}\n\n", summary.expense_count));

    output.push_str("By category\n");
    let rows = summary
        .category_breakdown
        .iter()
        .map(|t| CategoryRow {
            category: format!("{} {}", t.category.icon(), t.category),
            amount: money(settings, t.amount),
            share: format_percentage(t.amount.percentage_of(summary.total_expenses)),
        })
        .collect();
    output.push_str(&render_table(rows, &[1, 2]));

    output.push_str("\nLast 6 months\n");
    let max = summary
        .monthly_trend
        .iter()
        .map(|p| p.amount)
        .max()
        .unwrap_or_default();
    let rows = summary
        .monthly_trend
        .iter()
        .map(|p| TrendRow {
            month: format!("{} {}", p.label, p.month.year()),
            amount: money(settings, p.amount),
            bar: format_bar(p.amount.as_f64(), max.as_f64(), 20),
        })
        .collect();
    output.push_str(&render_table(rows, &[1]));

    output
}

/// Format the monthly planning overview
pub fn format_planning(overview: &PlanningOverview, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Monthly Planning\n");
    output.push_str("================\n");
    output.push_str(&format!(
        "  Income this month:     {}\n",
        money(settings, overview.total_income)
    ));
    output.push_str(&format!(
        "  Budgeted:              {}\n",
        money(settings, overview.total_budgeted)
    ));
    output.push_str(&format!(
        "  Held in savings goals: {}\n",
        money(settings, overview.total_savings)
    ));
    output.push_str(&format!(
        "  Available to spend:    {}\n",
        money(settings, overview.available_to_spend)
    ));
    output.push_str(&format!(
        "  Spent this month:      {}\n",
        money(settings, overview.total_spent)
    ));
    output.push_str(&format!(
        "  Left in budget:        {}\n",
        money(settings, overview.remaining_from_budget)
    ));
    output.push_str(&format!(
        "  Actual savings:        {}\n",
        money(settings, overview.actual_savings)
    ));

    let shortfall = overview.savings_shortfall();
    if shortfall.is_positive() {
        output.push_str(&format!(
            "  Savings pending:       {}\n",
            money(settings, shortfall)
        ));
    }

    if !overview.budget_statuses.is_empty() {
        output.push('\n');
        output.push_str(&super::format_budget_status(&overview.budget_statuses, settings));
    }

    output.push_str(&format!(
        "\nFinancial health: {} - {}\n",
        overview.health,
        overview.health.message()
    ));

    output
}
