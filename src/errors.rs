use serde::Serialize;

/// Error body printed by `--json` when a request fails.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Visual Crossing API key is not configured")]
    MissingApiKey,

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    /// The single line shown to the user. There is no retry; the user
    /// resubmits the search.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingApiKey => "Visual Crossing API key is not configured.".to_string(),
            AppError::LocationNotFound(_) => {
                "Location not found. Try a zip code or city name.".to_string()
            }
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Config(msg) => format!("Configuration error: {}", msg),
            AppError::ExternalServiceError(msg) => msg.clone(),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Something went wrong. Please try again.".to_string()
            }
            AppError::DatabaseError(err) => {
                tracing::error!("Database error: {:?}", err);
                "Could not access saved preferences.".to_string()
            }
            AppError::MigrationError(err) => {
                tracing::error!("Migration error: {:?}", err);
                "Could not prepare the preferences database.".to_string()
            }
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_not_found_message() {
        let err = AppError::LocationNotFound("zzzz".to_string());
        assert_eq!(
            err.user_message(),
            "Location not found. Try a zip code or city name."
        );
    }

    #[test]
    fn test_external_error_passes_message_through() {
        let err = AppError::ExternalServiceError("Weather API error: 503".to_string());
        assert_eq!(err.user_message(), "Weather API error: 503");
        assert_eq!(err.to_response().error, "Weather API error: 503");
    }

    #[test]
    fn test_database_error_hides_details() {
        let err = AppError::DatabaseError(sqlx::Error::RowNotFound);
        assert_eq!(err.user_message(), "Could not access saved preferences.");
    }
}
