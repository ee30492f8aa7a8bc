//! Calendar month periods
//!
//! Monthly totals and the six-month trend use calendar month boundaries
//! (first day through last day, inclusive), never rolling 30-day windows.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, identified by its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    start: NaiveDate,
}

impl CalendarMonth {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        // Day 1 exists in every month, so this only falls back on impossible input
        let start = date.with_day(1).unwrap_or(date);
        Self { start }
    }

    /// Create a month from year and month number (1-12)
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|start| Self { start })
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// The previous calendar month
    pub fn prev(&self) -> Self {
        let start = self
            .start
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.start);
        Self { start }
    }

    /// The `count` months ending with this one, oldest first
    pub fn trailing(&self, count: usize) -> Vec<CalendarMonth> {
        let mut months = Vec::with_capacity(count);
        let mut month = *self;
        for _ in 0..count {
            months.push(month);
            month = month.prev();
        }
        months.reverse();
        months
    }

    /// Short month name, e.g. "Oct"
    pub fn short_label(&self) -> String {
        self.start.format("%b").to_string()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let month = CalendarMonth::containing(date(2024, 2, 17));
        assert_eq!(month.start_date(), date(2024, 2, 1));
        assert_eq!(month.end_date(), date(2024, 2, 29));

        let december = CalendarMonth::new(2025, 12).unwrap();
        assert_eq!(december.end_date(), date(2025, 12, 31));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let month = CalendarMonth::new(2026, 10).unwrap();
        assert!(month.contains(date(2026, 10, 1)));
        assert!(month.contains(date(2026, 10, 31)));
        assert!(!month.contains(date(2026, 9, 30)));
        assert!(!month.contains(date(2026, 11, 1)));
    }

    #[test]
    fn test_prev_crosses_years() {
        let jan = CalendarMonth::new(2026, 1).unwrap();
        assert_eq!(jan.prev(), CalendarMonth::new(2025, 12).unwrap());
        assert_eq!(jan.prev().prev(), CalendarMonth::new(2025, 11).unwrap());
    }

    #[test]
    fn test_trailing_months() {
        let feb = CalendarMonth::new(2026, 2).unwrap();
        let months = feb.trailing(6);
        let labels: Vec<_> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            labels,
            vec!["2025-09", "2025-10", "2025-11", "2025-12", "2026-01", "2026-02"]
        );
    }

    #[test]
    fn test_labels() {
        let month = CalendarMonth::new(2026, 10).unwrap();
        assert_eq!(month.short_label(), "Oct");
        assert_eq!(month.to_string(), "2026-10");
    }
}
