//! Savings goal display formatting

use tabled::Tabled;

use super::{date, format_bar, format_percentage, money, render_table, truncate};
use crate::config::settings::Settings;
use crate::models::SavingsGoal;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

pub fn format_savings_list(goals: &[SavingsGoal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let rows = goals
        .iter()
        .map(|g| {
            let progress = g.progress();
            GoalRow {
                id: g.id.to_string(),
                name: truncate(&g.name, 30),
                saved: money(settings, g.current_amount),
                target: money(settings, g.target_amount),
                progress: format!(
                    "{} {}",
                    format_bar(progress.percentage, 100.0, 10),
                    format_percentage(progress.percentage)
                ),
                remaining: if progress.complete {
                    "Complete".to_string()
                } else {
                    money(settings, progress.remaining)
                },
                deadline: g
                    .deadline
                    .map(|d| date(settings, d))
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect();

    render_table(rows, &[2, 3, 5])
}
