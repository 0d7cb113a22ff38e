// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod period;
pub mod run;
pub mod target;

pub use period::{MonthKey, PeriodKey, YearKey};
pub use run::Run;
pub use target::{Target, TargetType};

/// Errors raised when building models from user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}
