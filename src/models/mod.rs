// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models: Strava payloads and the reshaped front-end response.
//!
//! `Strava*` types mirror upstream JSON with every field optional; the
//! `From` impls are the single place where defaults are applied.

pub mod activity;
pub mod athlete;
pub mod response;
pub mod stats;

pub use activity::{placeholder_activities, ActivitySummary, StravaActivitySummary};
pub use athlete::{AthleteProfile, StravaAthlete};
pub use response::StatsResponse;
pub use stats::{AthleteStats, StravaAthleteStats, StravaTotals, TotalsBucket};
