// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Period keys for monthly and yearly aggregation.
//!
//! A period is either a calendar month (`YYYY-MM`) or a calendar year
//! (`YYYY`). Keeping the two granularities as distinct types means a
//! monthly key can never be handed to the yearly aggregator.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::models::ModelError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, e.g. June 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month (1 = January)
    pub month: u32,
}

/// A calendar year, e.g. 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearKey {
    pub year: i32,
}

/// Tagged period key used by targets and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKey {
    Month(MonthKey),
    Year(YearKey),
}

impl MonthKey {
    /// Build a month key, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, ModelError> {
        if !(1..=12).contains(&month) {
            return Err(ModelError::InvalidPeriod(format!(
                "month must be 01-12, got {:02}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a `YYYY-MM` key.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        let invalid = || {
            ModelError::InvalidPeriod("monthly period must be in YYYY-MM format".to_string())
        };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    /// Human-readable label, e.g. "June 2025".
    pub fn display(&self) -> String {
        match MONTH_NAMES.get((self.month as usize).wrapping_sub(1)) {
            Some(name) => format!("{} {}", name, self.year),
            None => self.to_string(),
        }
    }

    /// First day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in the month, accounting for leap years.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn year_key(&self) -> YearKey {
        YearKey { year: self.year }
    }
}

impl YearKey {
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year() }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year
    }

    /// Parse a `YYYY` key.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        if s.len() != 4 || !all_digits(s) {
            return Err(ModelError::InvalidPeriod(
                "yearly period must be in YYYY format".to_string(),
            ));
        }
        let year = s
            .parse()
            .map_err(|_| ModelError::InvalidPeriod(format!("invalid year: {}", s)))?;
        Ok(Self { year })
    }
}

impl PeriodKey {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            PeriodKey::Month(m) => m.contains(date),
            PeriodKey::Year(y) => y.contains(date),
        }
    }

    /// Human-readable label: "June 2025" for months, "2025" for years.
    pub fn display(&self) -> String {
        match self {
            PeriodKey::Month(m) => m.display(),
            PeriodKey::Year(y) => y.to_string(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Month(m) => m.fmt(f),
            PeriodKey::Year(y) => y.fmt(f),
        }
    }
}

impl From<MonthKey> for PeriodKey {
    fn from(key: MonthKey) -> Self {
        PeriodKey::Month(key)
    }
}

impl From<YearKey> for PeriodKey {
    fn from(key: YearKey) -> Self {
        PeriodKey::Year(key)
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_parse() {
        let key = MonthKey::parse("2025-06").unwrap();
        assert_eq!(key, MonthKey { year: 2025, month: 6 });
        assert_eq!(key.to_string(), "2025-06");
        assert_eq!(key.display(), "June 2025");
    }

    #[test]
    fn test_month_key_parse_rejects_bad_input() {
        assert!(MonthKey::parse("2025-13").is_err());
        assert!(MonthKey::parse("2025-00").is_err());
        assert!(MonthKey::parse("2025-6").is_err());
        assert!(MonthKey::parse("2025").is_err());
        assert!(MonthKey::parse("abcd-ef").is_err());
    }

    #[test]
    fn test_year_key_parse() {
        assert_eq!(YearKey::parse("2025").unwrap(), YearKey { year: 2025 });
        assert!(YearKey::parse("2025-06").is_err());
        assert!(YearKey::parse("25").is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthKey::new(2025, 6).unwrap().days_in_month(), 30);
        assert_eq!(MonthKey::new(2025, 1).unwrap().days_in_month(), 31);
        assert_eq!(MonthKey::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(2000, 2).unwrap().days_in_month(), 29);
    }

    #[test]
    fn test_keys_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(MonthKey::of(date).to_string(), "2025-06");
        assert_eq!(YearKey::of(date).to_string(), "2025");

        let new_year = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(MonthKey::of(new_year).to_string(), "2024-12");
        assert_eq!(MonthKey::of(new_year).year_key(), YearKey::of(new_year));
    }

    #[test]
    fn test_period_contains() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let june: PeriodKey = MonthKey::new(2025, 6).unwrap().into();
        let may: PeriodKey = MonthKey::new(2025, 5).unwrap().into();
        let year: PeriodKey = YearKey { year: 2025 }.into();

        assert!(june.contains(date));
        assert!(!may.contains(date));
        assert!(year.contains(date));
        assert_eq!(year.display(), "2025");
    }
}
