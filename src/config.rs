use crate::errors::AppError;

const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// Application configuration, parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Visual Crossing API key. Absent means every fetch fails with `MissingApiKey`.
    pub api_key: Option<String>,
    pub base_url: String,
    pub database_url: String,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var("VISUAL_CROSSING_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let http_timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("HTTP_TIMEOUT_SECS must be a number: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: std::env::var("VISUAL_CROSSING_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            database_url: std::env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url()),
            http_timeout_secs,
        })
    }
}

/// SQLite file under the platform data directory, created on first use.
fn default_database_url() -> String {
    match dirs::data_dir() {
        Some(dir) => {
            let app_dir = dir.join("weatherrun");
            if let Err(e) = std::fs::create_dir_all(&app_dir) {
                tracing::warn!("Could not create {}: {}", app_dir.display(), e);
            }
            format!(
                "sqlite://{}?mode=rwc",
                app_dir.join("weatherrun.db").display()
            )
        }
        None => "sqlite://weatherrun.db?mode=rwc".to_string(),
    }
}
