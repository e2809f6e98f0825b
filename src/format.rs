// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for unit conversion and timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Convert meters to kilometers, rounded to two decimal places.
///
/// Non-finite or negative inputs (never sent by Strava) collapse to 0.
pub fn meters_to_km(meters: f64) -> f64 {
    if !meters.is_finite() || meters <= 0.0 {
        return 0.0;
    }
    (meters / 1000.0 * 100.0).round() / 100.0
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
