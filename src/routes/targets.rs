// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Distance target routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Target, TargetType};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_GOAL_KM: f64 = 100_000.0;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/targets", get(list_targets).post(create_target))
        .route(
            "/api/targets/{target_id}",
            put(update_target).delete(delete_target),
        )
}

#[derive(Debug, Deserialize, Validate)]
pub struct TargetRequest {
    pub target_type: TargetType,
    /// "YYYY-MM" for monthly, "YYYY" for yearly
    pub period: String,
    #[validate(range(exclusive_min = 0.0, max = MAX_GOAL_KM))]
    pub distance_km: f64,
}

/// Only the goal distance can change; type and period identify the target.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTargetRequest {
    #[validate(range(exclusive_min = 0.0, max = MAX_GOAL_KM))]
    pub distance_km: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TargetResponse {
    pub target_id: String,
    pub user_id: String,
    pub target_type: TargetType,
    pub period: String,
    /// "June 2025" or "2025"
    pub period_display: String,
    pub distance_km: f64,
    pub created_at: String,
}

impl From<Target> for TargetResponse {
    fn from(target: Target) -> Self {
        Self {
            period_display: target.period_display(),
            target_id: target.target_id,
            user_id: target.user_id,
            target_type: target.target_type,
            period: target.period,
            distance_km: target.distance_km,
            created_at: target.created_at,
        }
    }
}

async fn list_targets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<TargetResponse>>> {
    let targets = state.db.list_targets(&user.user_id).await?;
    tracing::debug!(user_id = %user.user_id, count = targets.len(), "Fetched targets");

    Ok(Json(targets.into_iter().map(TargetResponse::from).collect()))
}

/// Create a monthly or yearly target.
///
/// Duplicates for the same period are stored as-is; readers pick the first.
async fn create_target(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<TargetRequest>,
) -> Result<(StatusCode, Json<TargetResponse>)> {
    body.validate()?;
    let period = body.target_type.parse_period(body.period.trim())?;

    let target = Target {
        target_id: uuid::Uuid::new_v4().to_string(),
        user_id: user.user_id,
        target_type: body.target_type,
        period: period.to_string(),
        distance_km: body.distance_km,
        created_at: now_rfc3339(),
    };

    state.db.save_target(&target).await?;

    tracing::info!(
        user_id = %target.user_id,
        target_id = %target.target_id,
        target_type = %target.target_type,
        period = %target.period,
        distance_km = target.distance_km,
        "Target created"
    );

    Ok((StatusCode::CREATED, Json(target.into())))
}

/// Change the goal distance of an existing target.
async fn update_target(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(target_id): Path<String>,
    Json(body): Json<UpdateTargetRequest>,
) -> Result<Json<TargetResponse>> {
    body.validate()?;

    let mut target = state
        .db
        .get_target(&user.user_id, &target_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Target {} not found", target_id)))?;

    target.distance_km = body.distance_km;
    state.db.save_target(&target).await?;

    tracing::info!(
        user_id = %user.user_id,
        target_id = %target_id,
        distance_km = target.distance_km,
        "Target updated"
    );

    Ok(Json(target.into()))
}

async fn delete_target(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(target_id): Path<String>,
) -> Result<StatusCode> {
    if !state.db.delete_target(&user.user_id, &target_id).await? {
        return Err(AppError::NotFound(format!(
            "Target {} not found",
            target_id
        )));
    }

    tracing::info!(user_id = %user.user_id, target_id = %target_id, "Target deleted");
    Ok(StatusCode::NO_CONTENT)
}
