// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Success body of the stats endpoint.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::{ActivitySummary, AthleteProfile, AthleteStats};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsResponse {
    pub athlete: AthleteProfile,
    pub stats: AthleteStats,
    pub recent_activities: Vec<ActivitySummary>,
}
