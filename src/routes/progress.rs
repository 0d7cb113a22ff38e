// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress and dashboard routes.
//!
//! Totals are recomputed from the full run list on every request; nothing
//! derived here is stored.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{MonthKey, PeriodKey, Run, Target, TargetType};
use crate::routes::targets::TargetResponse;
use crate::services::aggregation::total_for_period;
use crate::services::calendar::{build_calendar, CalendarMonth};
use crate::services::progress::{progress_for_target, ProgressSummary};
use crate::time_utils::today_utc;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/progress", get(get_progress))
        .route("/api/dashboard", get(get_dashboard))
}

// ─── Per-Target Progress ─────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TargetProgress {
    pub target: TargetResponse,
    /// None if the stored target cannot be evaluated
    pub progress: Option<ProgressSummary>,
}

/// Progress for every target the user has set.
async fn get_progress(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<TargetProgress>>> {
    let (runs, targets) = tokio::try_join!(
        state.db.list_runs(&user.user_id),
        state.db.list_targets(&user.user_id)
    )?;

    tracing::debug!(
        user_id = %user.user_id,
        runs = runs.len(),
        targets = targets.len(),
        "Computing target progress"
    );

    let results = targets
        .into_iter()
        .map(|target| target_progress(&runs, target))
        .collect();

    Ok(Json(results))
}

fn target_progress(runs: &[Run], target: Target) -> TargetProgress {
    let progress = match target.period_key() {
        Ok(period) => summarize(runs, &period, Some(&target)),
        Err(e) => {
            tracing::warn!(
                target_id = %target.target_id,
                period = %target.period,
                error = %e,
                "Skipping progress for target with malformed period"
            );
            None
        }
    };

    TargetProgress {
        target: target.into(),
        progress,
    }
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Deserialize)]
struct DashboardQuery {
    /// Reference date ("YYYY-MM-DD"); defaults to today
    date: Option<String>,
}

/// Progress for one period on the dashboard.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PeriodProgress {
    /// "YYYY-MM" or "YYYY"
    pub period: String,
    pub period_display: String,
    /// Distance run in the period (km)
    pub total_km: f64,
    /// Target in effect for the period, if one is set
    pub target_id: Option<String>,
    pub progress: Option<ProgressSummary>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardResponse {
    pub reference_date: String,
    pub monthly: PeriodProgress,
    pub yearly: PeriodProgress,
    pub calendar: CalendarMonth,
}

/// Monthly and yearly progress plus the month calendar.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>> {
    let today = today_utc();
    let reference = parse_reference_date(params.date.as_deref())?.unwrap_or(today);

    let (runs, targets) = tokio::try_join!(
        state.db.list_runs(&user.user_id),
        state.db.list_targets(&user.user_id)
    )?;

    tracing::debug!(
        user_id = %user.user_id,
        reference = %reference,
        runs = runs.len(),
        targets = targets.len(),
        "Building dashboard"
    );

    Ok(Json(build_dashboard(reference, today, &runs, &targets)))
}

fn parse_reference_date(date: Option<&str>) -> Result<Option<NaiveDate>> {
    date.map(|raw| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest("Invalid 'date' parameter: must be YYYY-MM-DD".to_string())
        })
    })
    .transpose()
}

fn build_dashboard(
    reference: NaiveDate,
    today: NaiveDate,
    runs: &[Run],
    targets: &[Target],
) -> DashboardResponse {
    let month = MonthKey::of(reference);

    DashboardResponse {
        reference_date: reference.format("%Y-%m-%d").to_string(),
        monthly: period_progress(runs, targets, TargetType::Monthly, month.into()),
        yearly: period_progress(runs, targets, TargetType::Yearly, month.year_key().into()),
        calendar: build_calendar(reference, today, runs),
    }
}

fn period_progress(
    runs: &[Run],
    targets: &[Target],
    target_type: TargetType,
    period: PeriodKey,
) -> PeriodProgress {
    let key = period.to_string();
    // First matching target wins when duplicates exist.
    let target = targets
        .iter()
        .find(|t| t.target_type == target_type && t.period == key);

    PeriodProgress {
        period_display: period.display(),
        total_km: total_for_period(runs, &period),
        target_id: target.map(|t| t.target_id.clone()),
        progress: summarize(runs, &period, target),
        period: key,
    }
}

/// Progress for a period, recovering locally from a bad goal distance.
fn summarize(
    runs: &[Run],
    period: &PeriodKey,
    target: Option<&Target>,
) -> Option<ProgressSummary> {
    let current = total_for_period(runs, period);
    match progress_for_target(current, target) {
        Ok(progress) => progress,
        Err(e) => {
            tracing::warn!(
                target_id = ?target.map(|t| &t.target_id),
                error = %e,
                "Skipping progress for invalid target"
            );
            None
        }
    }
}
