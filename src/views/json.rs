use crate::errors::AppError;
use crate::services::recommend::Recommendation;

/// Pretty-printed recommendation.
pub fn render_recommendation(rec: &Recommendation) -> Result<String, AppError> {
    serde_json::to_string_pretty(rec)
        .map_err(|e| AppError::InternalError(format!("JSON serialization failed: {}", e)))
}

/// `{"error": "..."}` body for a failed query.
pub fn render_error(err: &AppError) -> String {
    let body = err.to_response();
    serde_json::to_string(&body).unwrap_or_else(|_| format!("{{\"error\":{:?}}}", body.error))
}
