// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore, or in-memory for local dev and tests).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StorageBackend};
use crate::error::AppError;
use crate::models::{Run, Target};

/// Collection names as constants.
pub mod collections {
    pub const RUNS: &str = "runs";
    pub const TARGETS: &str = "targets";
}

/// Storage handle shared by all request handlers.
///
/// Listing order is applied here so both backends return the same view:
/// runs newest first, targets oldest first.
#[derive(Clone)]
pub enum Db {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl Db {
    /// Connect to the backend selected in config.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.storage_backend {
            StorageBackend::Firestore => {
                Ok(Db::Firestore(FirestoreDb::new(&config.gcp_project_id).await?))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data will not survive a restart");
                Ok(Db::Memory(MemoryDb::new()))
            }
        }
    }

    /// Fresh in-memory database (tests).
    pub fn new_memory() -> Self {
        Db::Memory(MemoryDb::new())
    }

    // ─── Runs ────────────────────────────────────────────────────

    pub async fn list_runs(&self, user_id: &str) -> Result<Vec<Run>, AppError> {
        let mut runs = match self {
            Db::Firestore(db) => db.list_runs(user_id).await?,
            Db::Memory(db) => db.list_runs(user_id),
        };
        runs.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(runs)
    }

    pub async fn get_run(&self, user_id: &str, run_id: &str) -> Result<Option<Run>, AppError> {
        match self {
            Db::Firestore(db) => db.get_run(user_id, run_id).await,
            Db::Memory(db) => Ok(db.get_run(user_id, run_id)),
        }
    }

    pub async fn save_run(&self, run: &Run) -> Result<(), AppError> {
        match self {
            Db::Firestore(db) => db.save_run(run).await,
            Db::Memory(db) => {
                db.save_run(run);
                Ok(())
            }
        }
    }

    pub async fn delete_run(&self, user_id: &str, run_id: &str) -> Result<bool, AppError> {
        match self {
            Db::Firestore(db) => db.delete_run(user_id, run_id).await,
            Db::Memory(db) => Ok(db.delete_run(user_id, run_id)),
        }
    }

    // ─── Targets ─────────────────────────────────────────────────

    pub async fn list_targets(&self, user_id: &str) -> Result<Vec<Target>, AppError> {
        let mut targets = match self {
            Db::Firestore(db) => db.list_targets(user_id).await?,
            Db::Memory(db) => db.list_targets(user_id),
        };
        targets.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.target_id.cmp(&b.target_id))
        });
        Ok(targets)
    }

    pub async fn get_target(
        &self,
        user_id: &str,
        target_id: &str,
    ) -> Result<Option<Target>, AppError> {
        match self {
            Db::Firestore(db) => db.get_target(user_id, target_id).await,
            Db::Memory(db) => Ok(db.get_target(user_id, target_id)),
        }
    }

    pub async fn save_target(&self, target: &Target) -> Result<(), AppError> {
        match self {
            Db::Firestore(db) => db.save_target(target).await,
            Db::Memory(db) => {
                db.save_target(target);
                Ok(())
            }
        }
    }

    pub async fn delete_target(&self, user_id: &str, target_id: &str) -> Result<bool, AppError> {
        match self {
            Db::Firestore(db) => db.delete_target(user_id, target_id).await,
            Db::Memory(db) => Ok(db.delete_target(user_id, target_id)),
        }
    }
}
