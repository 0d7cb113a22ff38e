// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Month calendar view-model for the dashboard.
//!
//! The reference month and "today" are both passed in, so the output only
//! depends on the arguments.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{MonthKey, Run};

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalendarDay {
    /// 1-based day of month
    pub day: u32,
    pub has_run: bool,
    pub is_today: bool,
}

/// A full month of calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// e.g. "June 2025"
    pub label: String,
    /// Weekday of the 1st, 0 = Monday .. 6 = Sunday
    pub first_weekday: u32,
    pub days: Vec<CalendarDay>,
}

/// Build the calendar for the month containing `reference`.
pub fn build_calendar(reference: NaiveDate, today: NaiveDate, runs: &[Run]) -> CalendarMonth {
    let month = MonthKey::of(reference);

    let run_days: HashSet<u32> = runs
        .iter()
        .filter(|run| month.contains(run.date))
        .map(|run| run.date.day())
        .collect();

    let today_in_month = month.contains(today).then(|| today.day());

    let days = (1..=month.days_in_month())
        .map(|day| CalendarDay {
            day,
            has_run: run_days.contains(&day),
            is_today: today_in_month == Some(day),
        })
        .collect();

    let first_weekday = month
        .first_day()
        .map(|d| d.weekday().num_days_from_monday())
        .unwrap_or(0);

    CalendarMonth {
        year: month.year,
        month: month.month,
        label: month.display(),
        first_weekday,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_run(id: &str, day: &str) -> Run {
        Run {
            run_id: id.to_string(),
            user_id: "user-1".to_string(),
            date: date(day),
            distance_km: 5.0,
            duration_seconds: 1800,
            notes: String::new(),
            created_at: "2025-06-15T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_june_has_30_days_in_order() {
        let calendar = build_calendar(date("2025-06-15"), date("2025-06-15"), &[]);

        assert_eq!(calendar.days.len(), 30);
        let numbers: Vec<u32> = calendar.days.iter().map(|d| d.day).collect();
        assert_eq!(numbers, (1..=30).collect::<Vec<_>>());
        assert_eq!(calendar.label, "June 2025");
        assert!(calendar.days.iter().all(|d| !d.has_run));
    }

    #[test]
    fn test_february_leap_years() {
        let leap = build_calendar(date("2024-02-10"), date("2024-02-10"), &[]);
        assert_eq!(leap.days.len(), 29);

        let common = build_calendar(date("2025-02-10"), date("2025-02-10"), &[]);
        assert_eq!(common.days.len(), 28);
    }

    #[test]
    fn test_marks_days_with_runs() {
        let runs = vec![
            make_run("1", "2025-06-01"),
            make_run("2", "2025-06-05"),
            make_run("3", "2025-06-15"),
            make_run("4", "2025-05-28"),
        ];
        let calendar = build_calendar(date("2025-06-15"), date("2025-06-15"), &runs);

        let with_runs: Vec<u32> = calendar
            .days
            .iter()
            .filter(|d| d.has_run)
            .map(|d| d.day)
            .collect();
        assert_eq!(with_runs, vec![1, 5, 15]);
    }

    #[test]
    fn test_multiple_runs_same_day() {
        let runs = vec![make_run("1", "2025-06-01"), make_run("2", "2025-06-01")];
        let calendar = build_calendar(date("2025-06-15"), date("2025-06-15"), &runs);

        assert_eq!(calendar.days.iter().filter(|d| d.has_run).count(), 1);
        assert!(calendar.days[0].has_run);
    }

    #[test]
    fn test_other_month_ignored() {
        let runs = vec![make_run("1", "2025-05-28"), make_run("2", "2024-06-10")];
        let calendar = build_calendar(date("2025-06-15"), date("2025-06-15"), &runs);

        assert!(calendar.days.iter().all(|d| !d.has_run));
    }

    #[test]
    fn test_today_marker() {
        let calendar = build_calendar(date("2025-06-01"), date("2025-06-15"), &[]);

        for day in &calendar.days {
            assert_eq!(day.is_today, day.day == 15, "day {}", day.day);
        }
    }

    #[test]
    fn test_no_today_in_other_month() {
        let calendar = build_calendar(date("2025-05-10"), date("2025-06-15"), &[]);
        assert!(calendar.days.iter().all(|d| !d.is_today));

        // Same month number in a different year
        let calendar = build_calendar(date("2024-06-10"), date("2025-06-15"), &[]);
        assert!(calendar.days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_first_weekday() {
        // June 1st 2025 is a Sunday
        let calendar = build_calendar(date("2025-06-15"), date("2025-06-15"), &[]);
        assert_eq!(calendar.first_weekday, 6);
    }
}
