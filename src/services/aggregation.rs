// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Distance totals per month and per year.

use crate::models::{MonthKey, PeriodKey, Run, YearKey};
use crate::num_utils::round_to_tenth;

/// Total distance (km) of runs in the given month, rounded to 0.1 km.
pub fn monthly_total(runs: &[Run], month: MonthKey) -> f64 {
    sum_distance(runs, |run| month.contains(run.date))
}

/// Total distance (km) of runs in the given year, rounded to 0.1 km.
pub fn yearly_total(runs: &[Run], year: YearKey) -> f64 {
    sum_distance(runs, |run| year.contains(run.date))
}

/// Total distance for either granularity.
pub fn total_for_period(runs: &[Run], period: &PeriodKey) -> f64 {
    match period {
        PeriodKey::Month(month) => monthly_total(runs, *month),
        PeriodKey::Year(year) => yearly_total(runs, *year),
    }
}

fn sum_distance(runs: &[Run], matches: impl Fn(&Run) -> bool) -> f64 {
    let total: f64 = runs
        .iter()
        .filter(|run| matches(run))
        .map(|run| run.distance_km)
        .sum();
    round_to_tenth(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_run(id: &str, date: &str, distance_km: f64) -> Run {
        Run {
            run_id: id.to_string(),
            user_id: "user-1".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            distance_km,
            duration_seconds: 1800,
            notes: String::new(),
            created_at: "2025-06-15T12:00:00Z".to_string(),
        }
    }

    fn sample_runs() -> Vec<Run> {
        vec![
            make_run("1", "2025-06-01", 5.0),
            make_run("2", "2025-06-05", 3.2),
            make_run("3", "2025-06-15", 8.5),
            make_run("4", "2025-05-28", 4.0),
            make_run("5", "2024-12-31", 10.0),
        ]
    }

    fn june_2025() -> MonthKey {
        MonthKey::new(2025, 6).unwrap()
    }

    #[test]
    fn test_monthly_total() {
        assert_eq!(monthly_total(&sample_runs(), june_2025()), 16.7);
    }

    #[test]
    fn test_yearly_total() {
        assert_eq!(yearly_total(&sample_runs(), YearKey { year: 2025 }), 20.7);
        assert_eq!(yearly_total(&sample_runs(), YearKey { year: 2024 }), 10.0);
    }

    #[test]
    fn test_empty_runs() {
        assert_eq!(monthly_total(&[], june_2025()), 0.0);
        assert_eq!(yearly_total(&[], YearKey { year: 2025 }), 0.0);
    }

    #[test]
    fn test_no_matching_runs() {
        let runs = sample_runs();
        assert_eq!(monthly_total(&runs, MonthKey::new(2025, 7).unwrap()), 0.0);
        assert_eq!(yearly_total(&runs, YearKey { year: 2023 }), 0.0);
    }

    #[test]
    fn test_order_independent() {
        let mut runs = sample_runs();
        runs.reverse();
        assert_eq!(monthly_total(&runs, june_2025()), 16.7);
        assert_eq!(yearly_total(&runs, YearKey { year: 2025 }), 20.7);
    }

    #[test]
    fn test_total_for_period_dispatch() {
        let runs = sample_runs();
        assert_eq!(total_for_period(&runs, &june_2025().into()), 16.7);
        assert_eq!(
            total_for_period(&runs, &YearKey { year: 2025 }.into()),
            20.7
        );
    }

    #[test]
    fn test_absorbs_float_summation_error() {
        let runs = vec![
            make_run("1", "2025-06-01", 0.1),
            make_run("2", "2025-06-02", 0.2),
        ];
        assert_eq!(monthly_total(&runs, june_2025()), 0.3);
    }
}
