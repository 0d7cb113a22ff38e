// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Runs (one document per logged run)
//! - Targets (monthly/yearly distance goals)
//!
//! Documents are keyed by record ID and carry a `user_id` field; every read
//! checks that field so one user can never see another user's records.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Run, Target};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: firestore::FirestoreDb,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    // ─── Run Operations ──────────────────────────────────────────

    /// Get all runs owned by a user (unordered).
    pub async fn list_runs(&self, user_id: &str) -> Result<Vec<Run>, AppError> {
        let user_id = user_id.to_string();
        self.client
            .fluent()
            .select()
            .from(collections::RUNS)
            .filter(move |q| q.field("user_id").eq(user_id.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a run by ID if it belongs to the user.
    pub async fn get_run(&self, user_id: &str, run_id: &str) -> Result<Option<Run>, AppError> {
        let run: Option<Run> = self
            .client
            .fluent()
            .select()
            .by_id_in(collections::RUNS)
            .obj()
            .one(run_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(run.filter(|r| r.user_id == user_id))
    }

    /// Create or replace a run.
    pub async fn save_run(&self, run: &Run) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::RUNS)
            .document_id(&run.run_id)
            .object(run)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a run. Returns `false` if it did not exist for this user.
    pub async fn delete_run(&self, user_id: &str, run_id: &str) -> Result<bool, AppError> {
        if self.get_run(user_id, run_id).await?.is_none() {
            return Ok(false);
        }

        self.delete_document(collections::RUNS, run_id).await?;
        Ok(true)
    }

    // ─── Target Operations ───────────────────────────────────────

    /// Get all targets owned by a user (unordered).
    pub async fn list_targets(&self, user_id: &str) -> Result<Vec<Target>, AppError> {
        let user_id = user_id.to_string();
        self.client
            .fluent()
            .select()
            .from(collections::TARGETS)
            .filter(move |q| q.field("user_id").eq(user_id.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a target by ID if it belongs to the user.
    pub async fn get_target(
        &self,
        user_id: &str,
        target_id: &str,
    ) -> Result<Option<Target>, AppError> {
        let target: Option<Target> = self
            .client
            .fluent()
            .select()
            .by_id_in(collections::TARGETS)
            .obj()
            .one(target_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(target.filter(|t| t.user_id == user_id))
    }

    /// Create or replace a target.
    pub async fn save_target(&self, target: &Target) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::TARGETS)
            .document_id(&target.target_id)
            .object(target)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a target. Returns `false` if it did not exist for this user.
    pub async fn delete_target(&self, user_id: &str, target_id: &str) -> Result<bool, AppError> {
        if self.get_target(user_id, target_id).await?.is_none() {
            return Ok(false);
        }

        self.delete_document(collections::TARGETS, target_id).await?;
        Ok(true)
    }

    async fn delete_document(&self, collection: &str, document_id: &str) -> Result<(), AppError> {
        self.client
            .fluent()
            .delete()
            .from(collection)
            .document_id(document_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
