// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod strava;

pub use aggregator::StatsAggregator;
pub use strava::StravaClient;
