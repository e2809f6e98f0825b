// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use strava_stats::config::{ActivityFallback, Config};
use strava_stats::routes::create_router;
use strava_stats::AppState;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const ACCESS_TOKEN: &str = "T";
#[allow(dead_code)]
pub const ATHLETE_ID: u64 = 42;

/// Config pointing both Strava base URLs at the mock server.
///
/// Uses the empty-list activity fallback so tests see exactly what the
/// mock returned unless they opt into placeholders.
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> Config {
    Config {
        strava_api_url: format!("{}/api/v3", server.uri()),
        strava_oauth_url: format!("{}/oauth", server.uri()),
        activity_fallback: ActivityFallback::Empty,
        ..Config::default()
    }
}

/// Create a test app from the given config.
#[allow(dead_code)]
pub fn create_test_app(config: Config) -> axum::Router {
    create_router(Arc::new(AppState::new(config)))
}

/// Send a request and return status, headers, and raw body.
#[allow(dead_code)]
pub async fn send(app: axum::Router, verb: Method, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(verb)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

/// GET the stats endpoint and parse the JSON body.
#[allow(dead_code)]
pub async fn get_stats(app: axum::Router) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, "/api/strava-stats").await;
    let json = serde_json::from_slice(&body).expect("body should be JSON");
    (status, json)
}

#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": ACCESS_TOKEN,
            "expires_at": 1700000000,
            "expires_in": 21600,
            "refresh_token": "test_refresh_token"
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub async fn mount_athlete(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ATHLETE_ID,
            "firstname": "Jane",
            "lastname": "Doe",
            "profile": "https://example.com/jane.jpg",
            "city": "Palo Alto",
            "state": "California",
            "country": "United States"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// The stats body used by the end-to-end scenario.
#[allow(dead_code)]
pub fn stats_body() -> Value {
    json!({
        "biggest_ride_distance": 100000.0,
        "recent_run_totals": {
            "count": 3,
            "distance": 15000,
            "moving_time": 3600,
            "elapsed_time": 3700,
            "elevation_gain": 100
        },
        "all_run_totals": {
            "count": 120,
            "distance": 654321.0,
            "moving_time": 250000,
            "elevation_gain": 4321.5
        },
        "recent_ride_totals": {
            "count": 1,
            "distance": 40123.4,
            "moving_time": 5400,
            "elevation_gain": 350
        }
    })
}

#[allow(dead_code)]
pub async fn mount_stats(server: &MockServer, athlete_id: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v3/athletes/{}/stats", athlete_id)))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(1)
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub async fn mount_activities(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(header("authorization", "Bearer T"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount the happy path for every upstream call.
#[allow(dead_code)]
pub async fn mount_all(server: &MockServer, activities: ResponseTemplate) {
    mount_token(server).await;
    mount_athlete(server).await;
    mount_stats(server, ATHLETE_ID).await;
    mount_activities(server, activities).await;
}

/// Number of requests the mock server has seen.
#[allow(dead_code)]
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
