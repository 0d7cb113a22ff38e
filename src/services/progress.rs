// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress of an aggregated distance against a target goal.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Target;
use crate::num_utils::round_to_tenth;

/// Progress figures for display.
///
/// `percentage` and `remaining` are capped for display; `current` keeps the
/// true total even when it exceeds the goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressSummary {
    /// Distance covered in the period (km, 0.1 precision)
    pub current: f64,
    /// Goal distance (km)
    pub target: f64,
    /// Whole percent, 0..=100
    pub percentage: u8,
    /// Distance still to go (km, never negative)
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressError {
    #[error("Target goal distance must be positive, got {0}")]
    InvalidGoal(f64),
}

/// Compare a period total against a goal distance.
pub fn calculate_progress(current: f64, goal_km: f64) -> Result<ProgressSummary, ProgressError> {
    if !goal_km.is_finite() || goal_km <= 0.0 {
        return Err(ProgressError::InvalidGoal(goal_km));
    }

    let percentage = ((current / goal_km) * 100.0).round().clamp(0.0, 100.0) as u8;
    let remaining = round_to_tenth(goal_km - current).max(0.0);

    Ok(ProgressSummary {
        current: round_to_tenth(current),
        target: goal_km,
        percentage,
        remaining,
    })
}

/// Progress against an optional target. No target means nothing to show.
pub fn progress_for_target(
    current: f64,
    target: Option<&Target>,
) -> Result<Option<ProgressSummary>, ProgressError> {
    target
        .map(|t| calculate_progress(current, t.distance_km))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TargetType;

    fn make_target(distance_km: f64) -> Target {
        Target {
            target_id: "t1".to_string(),
            user_id: "user-1".to_string(),
            target_type: TargetType::Monthly,
            period: "2025-06".to_string(),
            distance_km,
            created_at: "2025-06-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_progress_basic() {
        let progress = calculate_progress(16.7, 50.0).unwrap();
        assert_eq!(
            progress,
            ProgressSummary {
                current: 16.7,
                target: 50.0,
                percentage: 33,
                remaining: 33.3,
            }
        );
    }

    #[test]
    fn test_percentage_capped_at_100() {
        let progress = calculate_progress(120.0, 100.0).unwrap();
        assert_eq!(progress.percentage, 100);
        assert_eq!(progress.current, 120.0);
    }

    #[test]
    fn test_remaining_never_negative() {
        let progress = calculate_progress(120.0, 100.0).unwrap();
        assert_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn test_zero_progress() {
        let progress = calculate_progress(0.0, 100.0).unwrap();
        assert_eq!(progress.percentage, 0);
        assert_eq!(progress.remaining, 100.0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 1 / 8 = 12.5%
        assert_eq!(calculate_progress(1.0, 8.0).unwrap().percentage, 13);
        // 3 / 8 = 37.5%
        assert_eq!(calculate_progress(3.0, 8.0).unwrap().percentage, 38);
    }

    #[test]
    fn test_unrounded_total_uses_raw_value() {
        let progress = calculate_progress(12.46, 100.0).unwrap();
        assert_eq!(progress.percentage, 12);
        assert_eq!(progress.current, 12.5);
        assert_eq!(progress.remaining, 87.5);

        assert_eq!(calculate_progress(0.46, 10.0).unwrap().remaining, 9.5);
    }

    #[test]
    fn test_invalid_goal_rejected() {
        assert_eq!(
            calculate_progress(10.0, 0.0),
            Err(ProgressError::InvalidGoal(0.0))
        );
        assert!(calculate_progress(10.0, -5.0).is_err());
        assert!(calculate_progress(10.0, f64::NAN).is_err());
        assert!(calculate_progress(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_progress_for_missing_target() {
        assert_eq!(progress_for_target(16.7, None), Ok(None));
    }

    #[test]
    fn test_progress_for_target() {
        let target = make_target(50.0);
        let progress = progress_for_target(16.7, Some(&target)).unwrap().unwrap();
        assert_eq!(progress.percentage, 33);

        let zero = make_target(0.0);
        assert!(progress_for_target(16.7, Some(&zero)).is_err());
    }
}
