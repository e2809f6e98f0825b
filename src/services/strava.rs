// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Refresh-token exchange for a short-lived access token
//! - Athlete profile and aggregate stats fetching
//! - Recent activity listing (tolerant of malformed bodies)

use crate::config::Credentials;
use crate::error::AppError;
use crate::models::{StravaActivitySummary, StravaAthlete, StravaAthleteStats};
use reqwest::StatusCode;
use serde::Deserialize;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    oauth_url: String,
}

impl StravaClient {
    /// Create a new Strava client against the given API and OAuth base URLs.
    pub fn new(base_url: impl Into<String>, oauth_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            oauth_url: oauth_url.into(),
        }
    }

    /// Exchange the long-lived refresh token for an access token.
    ///
    /// The upstream error body is logged but never returned to the caller.
    pub async fn refresh_access_token(
        &self,
        credentials: &Credentials<'_>,
    ) -> Result<String, AppError> {
        let url = format!("{}/token", self.oauth_url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("client_id", credentials.client_id),
                ("client_secret", credentials.client_secret),
                ("refresh_token", credentials.refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token refresh request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Token refresh failed");
            return Err(AppError::TokenRefresh(status));
        }

        let token: TokenRefreshResponse = response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token refresh failed: {}", e)))?;

        if token.access_token.is_empty() {
            return Err(AppError::StravaApi(
                "Token refresh failed: empty access token".to_string(),
            ));
        }

        Ok(token.access_token)
    }

    /// Get authenticated athlete profile.
    pub async fn get_athlete(&self, access_token: &str) -> Result<StravaAthlete, AppError> {
        let url = format!("{}/athlete", self.base_url);
        self.get_json(&url, access_token, "Failed to fetch athlete data")
            .await
    }

    /// Get aggregate run/ride totals for an athlete.
    pub async fn get_athlete_stats(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> Result<StravaAthleteStats, AppError> {
        let url = format!("{}/athletes/{}/stats", self.base_url, athlete_id);
        self.get_json(&url, access_token, "Failed to fetch athlete stats")
            .await
    }

    /// List the most recent activities, newest first.
    ///
    /// A body that is not a JSON array is an error; array entries that do
    /// not look like activities are dropped.
    pub async fn list_recent_activities(
        &self,
        access_token: &str,
        per_page: u32,
    ) -> Result<Vec<StravaActivitySummary>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Error fetching activities: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Failed to fetch activities");

            if status == StatusCode::UNAUTHORIZED {
                tracing::warn!(
                    "Authorization error - likely missing activity:read scope. Re-authorize with proper scopes."
                );
            }

            return Err(AppError::StravaApi(format!(
                "Failed to fetch activities: {}",
                status.as_u16()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("Activities JSON parse error: {}", e)))?;

        let items = match body {
            serde_json::Value::Array(items) => items,
            other => {
                tracing::warn!(body = %other, "Activities data is not an array");
                return Err(AppError::StravaApi(
                    "Activities data is not an array".to_string(),
                ));
            }
        };

        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(activity) => Some(activity),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed activity entry");
                    None
                }
            })
            .collect())
    }

    /// Generic GET request with JSON response.
    ///
    /// Non-success statuses become `"{context}: {status}"`.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        access_token: &str,
        context: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("{}: {}", context, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, url, "Strava request failed");
            return Err(AppError::StravaApi(format!(
                "{}: {}",
                context,
                status.as_u16()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("{}: JSON parse error: {}", context, e)))
    }
}

/// Token refresh response from Strava. Only the access token is used.
#[derive(Debug, Clone, Deserialize)]
struct TokenRefreshResponse {
    access_token: String,
}
