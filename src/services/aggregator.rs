// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stats aggregation service.
//!
//! Handles the core workflow, strictly in order:
//! 1. Validate credentials (before any network call)
//! 2. Exchange the refresh token for an access token
//! 3. Fetch the athlete profile
//! 4. Fetch aggregate stats for the athlete
//! 5. Fetch recent activities (never fatal)
//! 6. Reshape everything into a `StatsResponse`

use crate::config::{ActivityFallback, Config, ProfileFailurePolicy};
use crate::error::{AppError, Result};
use crate::models::{
    placeholder_activities, ActivitySummary, AthleteProfile, StatsResponse, StravaAthlete,
};
use crate::services::StravaClient;

/// Builds the stats payload for the configured athlete.
pub struct StatsAggregator<'a> {
    config: &'a Config,
    strava: &'a StravaClient,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(config: &'a Config, strava: &'a StravaClient) -> Self {
        Self { config, strava }
    }

    /// Run the full pipeline. Any error aborts the whole request.
    pub async fn aggregate(&self) -> Result<StatsResponse> {
        let credentials = self.config.credentials()?;

        let access_token = self.strava.refresh_access_token(&credentials).await?;
        tracing::debug!("Access token refreshed");

        let athlete = self.fetch_athlete(&access_token).await?;

        let athlete_id = self
            .config
            .strava_athlete_id
            .or(athlete.id)
            .ok_or_else(|| {
                AppError::StravaApi("Athlete ID unavailable for stats request".to_string())
            })?;

        let stats = self
            .strava
            .get_athlete_stats(&access_token, athlete_id)
            .await?
            .into_stats(self.config.stats_fields)?;

        let recent_activities = self.fetch_recent_activities(&access_token).await;

        tracing::info!(
            athlete_id,
            activities = recent_activities.len(),
            "Strava stats aggregated"
        );

        Ok(StatsResponse {
            athlete: AthleteProfile::from(athlete),
            stats,
            recent_activities,
        })
    }

    /// Fetch the profile, applying the configured failure policy.
    async fn fetch_athlete(&self, access_token: &str) -> Result<StravaAthlete> {
        match self.strava.get_athlete(access_token).await {
            Ok(athlete) => Ok(athlete),
            Err(e) => match self.config.profile_failure {
                ProfileFailurePolicy::FailFast => Err(e),
                ProfileFailurePolicy::DefaultAndContinue => {
                    tracing::warn!(error = %e, "Athlete profile unavailable, continuing with empty profile");
                    Ok(StravaAthlete::default())
                }
            },
        }
    }

    /// Fetch recent activities. Failures degrade to an empty list, which the
    /// fallback policy may then replace with placeholders.
    async fn fetch_recent_activities(&self, access_token: &str) -> Vec<ActivitySummary> {
        let activities: Vec<ActivitySummary> = match self
            .strava
            .list_recent_activities(access_token, self.config.activities_per_page)
            .await
        {
            Ok(activities) => activities
                .into_iter()
                .map(ActivitySummary::from)
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching activities");
                Vec::new()
            }
        };

        if !activities.is_empty() {
            return activities;
        }

        match self.config.activity_fallback {
            ActivityFallback::Empty => activities,
            ActivityFallback::Placeholder => {
                tracing::info!("No activities fetched, using placeholder data");
                placeholder_activities(chrono::Utc::now())
            }
        }
    }
}
