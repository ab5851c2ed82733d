//! Application state owned by the presentation layer.
//!
//! Holds what the user asked for (location, run time) and what the last query
//! produced (a recommendation or an error message). The scoring pipeline never
//! sees this type; it takes inputs and returns a fresh `Recommendation`.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::db::models::RunPreferences;
use crate::db::queries;
use crate::errors::AppError;
use crate::services::recommend::{build_recommendation, Recommendation};
use crate::services::run_time::RunTime;
use crate::services::visual_crossing::{ForecastDocument, VisualCrossingClient};
use crate::views::EMPTY_STATE_HINT;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub location: Option<String>,
    pub run_time: RunTime,
    pub result: Option<Recommendation>,
    pub error: Option<String>,
}

impl AppState {
    /// Start from saved preferences, falling back to defaults.
    pub fn restore(prefs: &RunPreferences) -> Self {
        Self {
            location: prefs.location.clone(),
            run_time: prefs.run_time(),
            result: None,
            error: None,
        }
    }

    /// Set the location query. Blank input is ignored.
    pub fn search(&mut self, query: &str) {
        let query = query.trim();
        if !query.is_empty() {
            self.location = Some(query.to_string());
        }
    }

    pub fn set_run_time(&mut self, run_time: RunTime) {
        self.run_time = run_time;
    }

    /// Step the run hour earlier or later, wrapping around midnight.
    pub fn adjust_hour(&mut self, delta: i32) {
        self.run_time = self.run_time.shifted(delta);
    }

    /// Replace the result with a freshly scored forecast.
    pub fn apply_forecast(&mut self, forecast: &ForecastDocument, reference: NaiveDateTime) {
        self.result = Some(build_recommendation(forecast, self.run_time, reference));
        self.error = None;
    }

    /// Record a failed query. No partial results are kept.
    pub fn apply_error(&mut self, err: &AppError) {
        self.result = None;
        self.error = Some(err.user_message());
    }
}

/// One fetch-and-score cycle for the current location and run time.
///
/// Preferences are saved only after the forecast was fetched and scored.
pub async fn load_weather(
    state: &mut AppState,
    client: &VisualCrossingClient,
    pool: &SqlitePool,
    reference: NaiveDateTime,
) -> Result<(), AppError> {
    let Some(location) = state.location.clone() else {
        return Err(AppError::BadRequest(EMPTY_STATE_HINT.to_string()));
    };

    let result = async {
        let forecast = client.fetch_forecast(&location).await?;
        state.apply_forecast(&forecast, reference);
        queries::save_preferences(pool, &location, state.run_time).await?;
        Ok::<(), AppError>(())
    }
    .await;

    if let Err(ref e) = result {
        tracing::warn!("Weather query for '{}' failed: {}", location, e);
        state.apply_error(e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::visual_crossing::DayForecast;
    use chrono::NaiveDate;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn forecast() -> ForecastDocument {
        ForecastDocument {
            resolved_address: "Denver, CO, United States".to_string(),
            days: (2..=8)
                .map(|d| DayForecast {
                    datetime: format!("2024-01-{:02}", d),
                    feelslike: Some(40.0 + d as f64),
                    precipprob: Some(0.0),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_restore_defaults() {
        let state = AppState::restore(&RunPreferences::default());
        assert!(state.location.is_none());
        assert_eq!(state.run_time, RunTime::DEFAULT);
    }

    #[test]
    fn test_search_ignores_blank() {
        let mut state = AppState::default();
        state.search("  80202 ");
        assert_eq!(state.location.as_deref(), Some("80202"));
        state.search("   ");
        assert_eq!(state.location.as_deref(), Some("80202"));
    }

    #[test]
    fn test_adjust_hour_wraps() {
        let mut state = AppState::default();
        state.adjust_hour(-6);
        assert_eq!(state.run_time, RunTime::new(23, 30).unwrap());
        state.adjust_hour(1);
        assert_eq!(state.run_time, RunTime::new(0, 30).unwrap());
    }

    #[test]
    fn test_error_clears_result() {
        let mut state = AppState::default();
        state.apply_forecast(&forecast(), reference());
        assert_eq!(state.result.as_ref().unwrap().days.len(), 5);

        state.apply_error(&AppError::LocationNotFound("x".to_string()));
        assert!(state.result.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Location not found. Try a zip code or city name.")
        );
    }

    #[tokio::test]
    async fn test_load_weather_saves_preferences_on_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast()))
            .mount(&mock_server)
            .await;

        let client = VisualCrossingClient::new_with_base_url(&mock_server.uri(), Some("k"));
        let pool = crate::db::connect("sqlite::memory:").await.unwrap();

        let mut state = AppState::default();
        state.search("Denver");
        state.set_run_time(RunTime::new(6, 0).unwrap());

        load_weather(&mut state, &client, &pool, reference()).await.unwrap();

        let rec = state.result.as_ref().unwrap();
        assert_eq!(rec.location, "Denver, CO, United States");
        assert_eq!(rec.days.len(), 5);
        assert!(state.error.is_none());

        let prefs = queries::load_preferences(&pool).await.unwrap();
        assert_eq!(prefs.location.as_deref(), Some("Denver"));
        assert_eq!(prefs.run_time(), RunTime::new(6, 0).unwrap());
    }

    #[tokio::test]
    async fn test_load_weather_failure_keeps_preferences() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&mock_server)
            .await;

        let client = VisualCrossingClient::new_with_base_url(&mock_server.uri(), Some("k"));
        let pool = crate::db::connect("sqlite::memory:").await.unwrap();

        let mut state = AppState::default();
        state.search("Atlantis");

        let err = load_weather(&mut state, &client, &pool, reference())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::LocationNotFound(_)));
        assert!(state.result.is_none());
        assert!(state.error.is_some());
        let prefs = queries::load_preferences(&pool).await.unwrap();
        assert!(prefs.location.is_none());
    }

    #[tokio::test]
    async fn test_load_weather_without_location() {
        let client = VisualCrossingClient::new_with_base_url("http://127.0.0.1:9", Some("k"));
        let pool = crate::db::connect("sqlite::memory:").await.unwrap();
        let mut state = AppState::default();

        let err = load_weather(&mut state, &client, &pool, reference())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
