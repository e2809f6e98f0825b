// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recent activity summaries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::format::{format_utc_rfc3339, meters_to_km};

const UNTITLED_ACTIVITY: &str = "Untitled Activity";
const UNKNOWN_TYPE: &str = "Unknown";

/// Summary activity from `GET /athlete/activities`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StravaActivitySummary {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Meters
    pub distance: Option<f64>,
    /// Seconds
    pub moving_time: Option<u64>,
    /// ISO 8601
    pub start_date: Option<String>,
    /// Meters
    pub total_elevation_gain: Option<f64>,
    /// Meters per second
    pub average_speed: Option<f64>,
}

/// Activity entry in the response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitySummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Kilometers, two decimals
    pub distance: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub moving_time: u64,
    pub start_date: String,
    pub total_elevation_gain: f64,
    pub average_speed: f64,
    /// Set only on demo entries substituted for an empty activity list.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
}

impl From<StravaActivitySummary> for ActivitySummary {
    fn from(activity: StravaActivitySummary) -> Self {
        Self {
            id: activity.id.unwrap_or(0),
            name: activity
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNTITLED_ACTIVITY.to_string()),
            activity_type: activity
                .activity_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            distance: meters_to_km(activity.distance.unwrap_or(0.0)),
            moving_time: activity.moving_time.unwrap_or(0),
            start_date: activity.start_date.unwrap_or_default(),
            total_elevation_gain: activity.total_elevation_gain.unwrap_or(0.0),
            average_speed: activity.average_speed.unwrap_or(0.0),
            placeholder: false,
        }
    }
}

/// Fixed demo activities shown when Strava returns none (typically because
/// the refresh token lacks the `activity:read` scope).
///
/// Start dates are one to four days before `now`, newest first.
pub fn placeholder_activities(now: DateTime<Utc>) -> Vec<ActivitySummary> {
    // (id, name, type, meters, moving seconds, days ago, elevation, m/s)
    const DEMO: [(u64, &str, &str, f64, u64, i64, f64, f64); 4] = [
        (15255972282, "Morning Run", "Run", 5000.0, 1800, 1, 50.0, 2.78),
        (15255972283, "Dragon Boat Practice", "Rowing", 8000.0, 3600, 2, 5.0, 2.22),
        (15255972284, "Outrigger Canoe Training", "StandUpPaddling", 6000.0, 2400, 3, 10.0, 2.5),
        (15255972285, "Evening Bike Ride", "Ride", 15000.0, 2700, 4, 150.0, 5.56),
    ];

    DEMO.iter()
        .map(
            |&(id, name, activity_type, meters, moving_time, days_ago, elevation, speed)| {
                ActivitySummary {
                    id,
                    name: name.to_string(),
                    activity_type: activity_type.to_string(),
                    distance: meters_to_km(meters),
                    moving_time,
                    start_date: format_utc_rfc3339(now - Duration::days(days_ago)),
                    total_elevation_gain: elevation,
                    average_speed: speed,
                    placeholder: true,
                }
            },
        )
        .collect()
}
