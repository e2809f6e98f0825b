// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregate activity totals from `GET /athletes/{id}/stats`.
//!
//! Strava reports distances in meters; the front-end gets kilometers.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::StatsFieldPolicy;
use crate::error::AppError;
use crate::format::meters_to_km;

/// One totals bucket as sent by Strava.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StravaTotals {
    pub count: Option<u64>,
    /// Meters
    pub distance: Option<f64>,
    /// Seconds
    pub moving_time: Option<u64>,
    /// Meters
    pub elevation_gain: Option<f64>,
}

/// `GET /athletes/{id}/stats` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StravaAthleteStats {
    pub recent_run_totals: Option<StravaTotals>,
    pub all_run_totals: Option<StravaTotals>,
    pub recent_ride_totals: Option<StravaTotals>,
    pub all_ride_totals: Option<StravaTotals>,
}

/// Totals for one activity class over one window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TotalsBucket {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub count: u64,
    /// Kilometers, two decimals
    pub distance: f64,
    /// Seconds
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub moving_time: u64,
    /// Meters
    pub elevation_gain: f64,
}

impl From<StravaTotals> for TotalsBucket {
    fn from(totals: StravaTotals) -> Self {
        Self {
            count: totals.count.unwrap_or(0),
            distance: meters_to_km(totals.distance.unwrap_or(0.0)),
            moving_time: totals.moving_time.unwrap_or(0),
            elevation_gain: totals.elevation_gain.unwrap_or(0.0),
        }
    }
}

/// The `stats` object of the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteStats {
    pub recent_run_totals: TotalsBucket,
    pub all_run_totals: TotalsBucket,
    pub recent_ride_totals: TotalsBucket,
    pub all_ride_totals: TotalsBucket,
}

impl StravaAthleteStats {
    /// Project into response buckets.
    ///
    /// Under [`StatsFieldPolicy::Strict`] a bucket missing from the upstream
    /// body is an error; otherwise it becomes a zeroed bucket.
    pub fn into_stats(self, policy: StatsFieldPolicy) -> Result<AthleteStats, AppError> {
        let bucket = |totals: Option<StravaTotals>, name: &str| match (totals, policy) {
            (Some(totals), _) => Ok(TotalsBucket::from(totals)),
            (None, StatsFieldPolicy::Default) => Ok(TotalsBucket::default()),
            (None, StatsFieldPolicy::Strict) => {
                Err(AppError::StravaApi(format!("Missing stats field: {}", name)))
            }
        };

        Ok(AthleteStats {
            recent_run_totals: bucket(self.recent_run_totals, "recent_run_totals")?,
            all_run_totals: bucket(self.all_run_totals, "all_run_totals")?,
            recent_ride_totals: bucket(self.recent_ride_totals, "recent_ride_totals")?,
            all_ride_totals: bucket(self.all_ride_totals, "all_ride_totals")?,
        })
    }
}
