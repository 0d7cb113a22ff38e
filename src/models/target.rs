// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Distance target model for storage and API.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::period::{MonthKey, PeriodKey, YearKey};
use crate::models::ModelError;

/// Target granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Monthly,
    Yearly,
}

impl TargetType {
    /// Parse a period string, checking it matches this granularity.
    ///
    /// Monthly targets take `YYYY-MM`, yearly targets take `YYYY`.
    pub fn parse_period(&self, period: &str) -> Result<PeriodKey, ModelError> {
        match self {
            TargetType::Monthly => MonthKey::parse(period).map(PeriodKey::Month),
            TargetType::Yearly => YearKey::parse(period).map(PeriodKey::Year),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Monthly => f.write_str("monthly"),
            TargetType::Yearly => f.write_str("yearly"),
        }
    }
}

/// Stored distance target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Target ID (UUID, also used as document ID)
    pub target_id: String,
    /// Owner (JWT subject)
    pub user_id: String,
    pub target_type: TargetType,
    /// "YYYY-MM" for monthly targets, "YYYY" for yearly
    pub period: String,
    /// Goal distance in kilometers
    pub distance_km: f64,
    /// When this target was created (ISO 8601)
    pub created_at: String,
}

impl Target {
    /// Typed period key for this target.
    pub fn period_key(&self) -> Result<PeriodKey, ModelError> {
        self.target_type.parse_period(&self.period)
    }

    /// Human-readable period, e.g. "June 2025" or "2025".
    ///
    /// Falls back to the raw period string if the stored value is malformed.
    pub fn period_display(&self) -> String {
        self.period_key()
            .map(|key| key.display())
            .unwrap_or_else(|_| self.period.clone())
    }
}
