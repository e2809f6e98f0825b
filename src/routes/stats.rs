// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public stats endpoint consumed by the front-end.

use crate::error::Result;
use crate::models::StatsResponse;
use crate::services::StatsAggregator;
use crate::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use std::sync::Arc;

/// Primary path.
pub const STATS_PATH: &str = "/api/strava-stats";
/// Path used by front-ends built against the Netlify function layout.
pub const LEGACY_STATS_PATH: &str = "/.netlify/functions/strava-stats";

/// Stats routes. Every method is accepted; only OPTIONS is special-cased.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(STATS_PATH, any(handle_stats))
        .route(LEGACY_STATS_PATH, any(handle_stats))
}

/// Answer preflights immediately, otherwise run the aggregation pipeline.
async fn handle_stats(method: Method, State(state): State<Arc<AppState>>) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, "").into_response();
    }

    get_stats(&state).await.into_response()
}

async fn get_stats(state: &AppState) -> Result<Json<StatsResponse>> {
    let response = StatsAggregator::new(&state.config, &state.strava)
        .aggregate()
        .await?;
    Ok(Json(response))
}
