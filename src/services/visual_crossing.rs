//! Visual Crossing Timeline API client.
//!
//! Fetches a 7-day daily + hourly forecast for a free-text location query.
//! See: https://www.visualcrossing.com/resources/documentation/weather-api/timeline-weather-api/

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Client for the Visual Crossing Timeline API.
#[derive(Debug, Clone)]
pub struct VisualCrossingClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

// --- Visual Crossing JSON document ---
//
// Every measurement is optional: the provider omits or nulls fields for some
// locations and horizons, and the scorer degrades field by field.

/// A full timeline response for one location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastDocument {
    /// Provider-resolved location label, e.g. "Boston, MA, United States".
    #[serde(rename = "resolvedAddress", default)]
    pub resolved_address: String,
    /// The query as the provider received it.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
    /// Chronological, one entry per local calendar date.
    #[serde(default)]
    pub days: Vec<DayForecast>,
}

/// An active weather alert. Passed through to the caller untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub event: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub onset: Option<String>,
    pub ends: Option<String>,
}

/// Day-level aggregates plus the hourly breakdown for one date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayForecast {
    /// Local calendar date, `YYYY-MM-DD`.
    pub datetime: String,
    pub tempmax: Option<f64>,
    pub tempmin: Option<f64>,
    pub temp: Option<f64>,
    pub feelslike: Option<f64>,
    pub humidity: Option<f64>,
    pub precip: Option<f64>,
    pub precipprob: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddir: Option<f64>,
    pub uvindex: Option<f64>,
    pub severerisk: Option<f64>,
    pub conditions: Option<String>,
    /// Local clock time, `HH:MM:SS`.
    pub sunrise: Option<String>,
    /// Local clock time, `HH:MM:SS`.
    pub sunset: Option<String>,
    #[serde(default)]
    pub hours: Vec<HourSample>,
}

/// One hourly sample within a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourSample {
    /// Local clock time, `HH:00:00`.
    pub datetime: String,
    pub temp: Option<f64>,
    pub feelslike: Option<f64>,
    pub humidity: Option<f64>,
    pub precip: Option<f64>,
    pub precipprob: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddir: Option<f64>,
    pub uvindex: Option<f64>,
    pub severerisk: Option<f64>,
    pub conditions: Option<String>,
}

impl VisualCrossingClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Client pointed at an arbitrary base URL (used against mock servers).
    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }

    /// Fetch the next-7-days forecast for a location (zip code or city name).
    ///
    /// A single request with no retry; any failure is terminal for this query.
    pub async fn fetch_forecast(&self, location: &str) -> Result<ForecastDocument, AppError> {
        let key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::BadRequest("Location must not be empty".to_string()));
        }

        let url = self.build_url(location, key)?;
        tracing::debug!("Fetching forecast for '{}' from {}", location, self.base_url);

        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Weather request failed: {}", e))
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST {
            return Err(AppError::LocationNotFound(location.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Weather API error: {}",
                status.as_u16()
            )));
        }

        let document: ForecastDocument = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Weather API JSON parse error: {}", e))
        })?;

        tracing::info!(
            "Fetched {} forecast days for '{}'",
            document.days.len(),
            document.resolved_address
        );

        Ok(document)
    }

    /// `{base}/{location}/next7days?unitGroup=us&include=days,hours,alerts&key=...`
    ///
    /// The location is pushed as one path segment so commas, spaces and
    /// slashes in city names are percent-encoded.
    fn build_url(&self, location: &str, key: &str) -> Result<reqwest::Url, AppError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("Base URL '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(location)
            .push("next7days");

        url.query_pairs_mut()
            .append_pair("unitGroup", "us")
            .append_pair("include", "days,hours,alerts")
            .append_pair("key", key);

        Ok(url)
    }
}
