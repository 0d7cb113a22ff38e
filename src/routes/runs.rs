// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run log routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::run::parse_duration;
use crate::models::Run;
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_DISTANCE_KM: f64 = 1000.0;
const MAX_NOTES_LEN: u64 = 1000;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/runs", get(list_runs).post(create_run))
        .route("/api/runs/{run_id}", put(update_run).delete(delete_run))
}

/// Body for creating or replacing a run.
#[derive(Debug, Deserialize, Validate)]
pub struct RunRequest {
    /// "YYYY-MM-DD"
    pub date: NaiveDate,
    #[validate(range(exclusive_min = 0.0, max = MAX_DISTANCE_KM))]
    pub distance_km: f64,
    /// "HH:MM:SS"
    pub duration: String,
    #[serde(default)]
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunResponse {
    pub run_id: String,
    pub date: String,
    pub distance_km: f64,
    pub duration: String,
    pub pace: String,
    pub notes: String,
}

impl From<Run> for RunResponse {
    fn from(run: Run) -> Self {
        Self {
            duration: run.duration_formatted(),
            pace: run.pace_formatted(),
            date: run.date.format("%Y-%m-%d").to_string(),
            run_id: run.run_id,
            distance_km: run.distance_km,
            notes: run.notes,
        }
    }
}

/// List the user's runs, newest first.
async fn list_runs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<RunResponse>>> {
    let runs = state.db.list_runs(&user.user_id).await?;
    tracing::debug!(user_id = %user.user_id, count = runs.len(), "Fetched runs");

    Ok(Json(runs.into_iter().map(RunResponse::from).collect()))
}

/// Log a new run.
async fn create_run(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<RunRequest>,
) -> Result<(StatusCode, Json<RunResponse>)> {
    body.validate()?;
    let duration_seconds = parse_duration(&body.duration)?;

    let run = Run {
        run_id: uuid::Uuid::new_v4().to_string(),
        user_id: user.user_id,
        date: body.date,
        distance_km: body.distance_km,
        duration_seconds,
        notes: body.notes.unwrap_or_default(),
        created_at: now_rfc3339(),
    };

    state.db.save_run(&run).await?;

    tracing::info!(
        user_id = %run.user_id,
        run_id = %run.run_id,
        date = %run.date,
        distance_km = run.distance_km,
        "Run logged"
    );

    Ok((StatusCode::CREATED, Json(run.into())))
}

/// Replace the fields of an existing run.
async fn update_run(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(run_id): Path<String>,
    Json(body): Json<RunRequest>,
) -> Result<Json<RunResponse>> {
    body.validate()?;
    let duration_seconds = parse_duration(&body.duration)?;

    let existing = state
        .db
        .get_run(&user.user_id, &run_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Run {} not found", run_id)))?;

    let run = Run {
        date: body.date,
        distance_km: body.distance_km,
        duration_seconds,
        notes: body.notes.unwrap_or_default(),
        ..existing
    };

    state.db.save_run(&run).await?;
    tracing::info!(user_id = %user.user_id, run_id = %run.run_id, "Run updated");

    Ok(Json(run.into()))
}

async fn delete_run(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(run_id): Path<String>,
) -> Result<StatusCode> {
    if !state.db.delete_run(&user.user_id, &run_id).await? {
        return Err(AppError::NotFound(format!("Run {} not found", run_id)));
    }

    tracing::info!(user_id = %user.user_id, run_id = %run_id, "Run deleted");
    Ok(StatusCode::NO_CONTENT)
}
