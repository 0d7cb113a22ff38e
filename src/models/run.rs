// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ModelError;

/// Stored run record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Run ID (UUID, also used as document ID)
    pub run_id: String,
    /// Owner (JWT subject)
    pub user_id: String,
    /// Calendar date of the run ("YYYY-MM-DD")
    pub date: NaiveDate,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Elapsed time in seconds
    pub duration_seconds: u32,
    #[serde(default)]
    pub notes: String,
    /// When this run was logged (ISO 8601)
    pub created_at: String,
}

impl Run {
    /// Duration formatted as "HH:MM:SS".
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration_seconds)
    }

    /// Pace formatted as "MM:SS" per kilometer.
    pub fn pace_formatted(&self) -> String {
        format_pace(self.duration_seconds, self.distance_km)
    }
}

/// Parse a "HH:MM:SS" duration into seconds.
pub fn parse_duration(duration: &str) -> Result<u32, ModelError> {
    if duration.is_empty() {
        return Err(ModelError::InvalidDuration("empty string".to_string()));
    }

    let parts: Vec<&str> = duration.split(':').collect();
    let well_formed = parts.len() == 3
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return Err(ModelError::InvalidDuration(
            "must be HH:MM:SS".to_string(),
        ));
    }

    // Two ASCII digits always parse.
    let hours: u32 = parts[0].parse().unwrap_or(0);
    let minutes: u32 = parts[1].parse().unwrap_or(0);
    let seconds: u32 = parts[2].parse().unwrap_or(0);

    if minutes >= 60 {
        return Err(ModelError::InvalidDuration(
            "minutes must be < 60".to_string(),
        ));
    }
    if seconds >= 60 {
        return Err(ModelError::InvalidDuration(
            "seconds must be < 60".to_string(),
        ));
    }

    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Format seconds as "HH:MM:SS".
pub fn format_duration(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format pace as "MM:SS" per kilometer. Zero distance yields "00:00".
pub fn format_pace(duration_seconds: u32, distance_km: f64) -> String {
    let pace_seconds = if distance_km > 0.0 {
        (duration_seconds as f64 / distance_km) as u64
    } else {
        0
    };
    format!("{:02}:{:02}", pace_seconds / 60, pace_seconds % 60)
}
