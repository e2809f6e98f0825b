//! Application configuration loaded once at startup from environment variables.
//!
//! Strava credentials are read here but only validated per request, so that a
//! misconfigured deployment still answers CORS preflights and reports the
//! problem through the normal JSON error body.

use crate::error::AppError;
use std::env;
use std::str::FromStr;

const DEFAULT_API_URL: &str = "https://www.strava.com/api/v3";
const DEFAULT_OAUTH_URL: &str = "https://www.strava.com/oauth";
const DEFAULT_ACTIVITIES_PER_PAGE: u32 = 4;
/// Strava rejects `per_page` values above 200.
const MAX_ACTIVITIES_PER_PAGE: u32 = 200;

/// What to return when the recent activities list comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFallback {
    /// Return an empty list.
    Empty,
    /// Substitute the fixed demo activities (flagged as placeholders).
    #[default]
    Placeholder,
}

/// How to treat a failed athlete profile fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileFailurePolicy {
    /// Abort the request.
    #[default]
    FailFast,
    /// Log, use an empty profile, and keep going.
    DefaultAndContinue,
}

/// How to treat totals buckets missing from the stats response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFieldPolicy {
    /// Missing buckets become zeroed buckets.
    #[default]
    Default,
    /// A missing bucket fails the request.
    Strict,
}

impl FromStr for ActivityFallback {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "placeholder" => Ok(Self::Placeholder),
            _ => Err(()),
        }
    }
}

impl FromStr for ProfileFailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" => Ok(Self::FailFast),
            "default_and_continue" => Ok(Self::DefaultAndContinue),
            _ => Err(()),
        }
    }
}

impl FromStr for StatsFieldPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "strict" => Ok(Self::Strict),
            _ => Err(()),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Strava credentials (validated per request) ---
    /// Strava OAuth client ID
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Long-lived refresh token for the single proxied athlete
    pub strava_refresh_token: String,
    /// Fixed athlete ID; when unset the ID comes from the profile fetch
    pub strava_athlete_id: Option<u64>,

    // --- Upstream endpoints ---
    /// Base URL for `/athlete`, `/athletes/{id}/stats`, ...
    pub strava_api_url: String,
    /// Base URL for `/token`
    pub strava_oauth_url: String,

    // --- Handler behavior ---
    pub activities_per_page: u32,
    pub activity_fallback: ActivityFallback,
    pub profile_failure: ProfileFailurePolicy,
    pub stats_fields: StatsFieldPolicy,

    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_refresh_token: "test_refresh_token".to_string(),
            strava_athlete_id: None,
            strava_api_url: DEFAULT_API_URL.to_string(),
            strava_oauth_url: DEFAULT_OAUTH_URL.to_string(),
            activities_per_page: DEFAULT_ACTIVITIES_PER_PAGE,
            activity_fallback: ActivityFallback::default(),
            profile_failure: ProfileFailurePolicy::default(),
            stats_fields: StatsFieldPolicy::default(),
            port: 8080,
        }
    }
}

/// Borrowed view of the credentials once they are known to be present.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub refresh_token: &'a str,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `from_env` is a thin wrapper; tests pass a map instead of touching the
    /// process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string());
        let non_empty = |key: &str| var(key).filter(|v| !v.is_empty());

        let strava_athlete_id = non_empty("STRAVA_ATHLETE_ID")
            .map(|raw| match raw.parse::<u64>() {
                Ok(id) if id > 0 => Ok(id),
                _ => Err(ConfigError::Invalid {
                    name: "STRAVA_ATHLETE_ID",
                    value: raw,
                }),
            })
            .transpose()?;

        let activities_per_page = non_empty("STRAVA_ACTIVITIES_PER_PAGE")
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| ConfigError::Invalid {
                    name: "STRAVA_ACTIVITIES_PER_PAGE",
                    value: raw,
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_ACTIVITIES_PER_PAGE)
            .clamp(1, MAX_ACTIVITIES_PER_PAGE);

        Ok(Self {
            strava_client_id: var("STRAVA_CLIENT_ID").unwrap_or_default(),
            strava_client_secret: var("STRAVA_CLIENT_SECRET").unwrap_or_default(),
            strava_refresh_token: var("STRAVA_REFRESH_TOKEN").unwrap_or_default(),
            strava_athlete_id,
            strava_api_url: non_empty("STRAVA_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            strava_oauth_url: non_empty("STRAVA_OAUTH_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OAUTH_URL.to_string()),
            activities_per_page,
            activity_fallback: parse_policy(non_empty("ACTIVITY_FALLBACK"), "ACTIVITY_FALLBACK")?,
            profile_failure: parse_policy(
                non_empty("PROFILE_FAILURE_POLICY"),
                "PROFILE_FAILURE_POLICY",
            )?,
            stats_fields: parse_policy(non_empty("STATS_FIELD_POLICY"), "STATS_FIELD_POLICY")?,
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Return the credentials, or fail if any required one is empty.
    ///
    /// Called before any outbound request is made.
    pub fn credentials(&self) -> Result<Credentials<'_>, AppError> {
        let present = |v: &str| !v.trim().is_empty();

        if !present(&self.strava_client_id)
            || !present(&self.strava_client_secret)
            || !present(&self.strava_refresh_token)
        {
            return Err(AppError::MissingCredentials);
        }

        Ok(Credentials {
            client_id: &self.strava_client_id,
            client_secret: &self.strava_client_secret,
            refresh_token: &self.strava_refresh_token,
        })
    }
}

fn parse_policy<T>(raw: Option<String>, name: &'static str) -> Result<T, ConfigError>
where
    T: FromStr + Default,
{
    match raw {
        None => Ok(T::default()),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
