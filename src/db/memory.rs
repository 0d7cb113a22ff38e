// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage backend for local development and tests.

use dashmap::DashMap;
use std::sync::Arc;

use crate::models::{Run, Target};

/// Process-local store keyed by record ID.
#[derive(Clone, Default)]
pub struct MemoryDb {
    runs: Arc<DashMap<String, Run>>,
    targets: Arc<DashMap<String, Target>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Run Operations ──────────────────────────────────────────

    pub fn list_runs(&self, user_id: &str) -> Vec<Run> {
        self.runs
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get_run(&self, user_id: &str, run_id: &str) -> Option<Run> {
        self.runs
            .get(run_id)
            .filter(|run| run.user_id == user_id)
            .map(|run| run.value().clone())
    }

    pub fn save_run(&self, run: &Run) {
        self.runs.insert(run.run_id.clone(), run.clone());
    }

    pub fn delete_run(&self, user_id: &str, run_id: &str) -> bool {
        self.runs
            .remove_if(run_id, |_, run| run.user_id == user_id)
            .is_some()
    }

    // ─── Target Operations ───────────────────────────────────────

    pub fn list_targets(&self, user_id: &str) -> Vec<Target> {
        self.targets
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get_target(&self, user_id: &str, target_id: &str) -> Option<Target> {
        self.targets
            .get(target_id)
            .filter(|target| target.user_id == user_id)
            .map(|target| target.value().clone())
    }

    pub fn save_target(&self, target: &Target) {
        self.targets
            .insert(target.target_id.clone(), target.clone());
    }

    pub fn delete_target(&self, user_id: &str, target_id: &str) -> bool {
        self.targets
            .remove_if(target_id, |_, target| target.user_id == user_id)
            .is_some()
    }
}
