// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Stats: a small proxy that serves one athlete's Strava profile,
//! totals, and recent activities to a static front-end.
//!
//! Each request refreshes an access token, calls the Strava API, and
//! reshapes the results (kilometers, defaulted fields) into a single JSON
//! payload. Nothing is cached or stored between requests.

pub mod config;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::StravaClient;

/// Shared application state. Read-only after startup.
pub struct AppState {
    pub config: Config,
    pub strava: StravaClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let strava = StravaClient::new(
            config.strava_api_url.clone(),
            config.strava_oauth_url.clone(),
        );
        Self { config, strava }
    }
}
