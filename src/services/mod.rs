// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - progress aggregation and calendar logic.
//!
//! Everything here is a pure function over in-memory records.

pub mod aggregation;
pub mod calendar;
pub mod progress;

pub use aggregation::{monthly_total, total_for_period, yearly_total};
pub use calendar::{build_calendar, CalendarDay, CalendarMonth};
pub use progress::{calculate_progress, progress_for_target, ProgressError, ProgressSummary};
