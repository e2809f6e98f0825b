// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete profile as returned by Strava and as sent to the front-end.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// `GET /athlete` response. Only the fields we forward are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StravaAthlete {
    pub id: Option<u64>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Profile picture URL
    pub profile: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Athlete profile in the response envelope. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AthleteProfile {
    pub firstname: String,
    pub lastname: String,
    pub profile: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl From<StravaAthlete> for AthleteProfile {
    fn from(athlete: StravaAthlete) -> Self {
        Self {
            firstname: athlete.firstname.unwrap_or_default(),
            lastname: athlete.lastname.unwrap_or_default(),
            profile: athlete.profile.unwrap_or_default(),
            city: athlete.city.unwrap_or_default(),
            state: athlete.state.unwrap_or_default(),
            country: athlete.country.unwrap_or_default(),
        }
    }
}
