use sqlx::SqlitePool;

use super::models::{Preference, RunPreferences};
use crate::services::run_time::RunTime;

/// Location query string, stored verbatim as typed.
pub const KEY_LOCATION: &str = "weatherrun_zip";
pub const KEY_HOUR: &str = "weatherrun_hour";
pub const KEY_MINUTE: &str = "weatherrun_minute";

/// Get a single preference row by key.
pub async fn get_preference(
    pool: &SqlitePool,
    key: &str,
) -> Result<Option<Preference>, sqlx::Error> {
    sqlx::query_as::<_, Preference>(
        "SELECT key, value, updated_at FROM preferences WHERE key = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await
}

/// Insert or overwrite a preference (last write wins).
pub async fn upsert_preference(
    pool: &SqlitePool,
    key: &str,
    value: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO preferences (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT (key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await?;
    Ok(())
}

/// Parse a stored numeric preference; unparseable values count as unset.
fn parse_stored_number(key: &str, row: Option<Preference>) -> Option<u32> {
    let row = row?;
    match row.value.trim().parse::<u32>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!("Ignoring stored {} = '{}': {}", key, row.value, e);
            None
        }
    }
}

/// Restore all saved run preferences. Missing keys stay `None`.
pub async fn load_preferences(pool: &SqlitePool) -> Result<RunPreferences, sqlx::Error> {
    let location = get_preference(pool, KEY_LOCATION)
        .await?
        .map(|p| p.value)
        .filter(|v| !v.trim().is_empty());
    let hour = parse_stored_number(KEY_HOUR, get_preference(pool, KEY_HOUR).await?);
    let minute = parse_stored_number(KEY_MINUTE, get_preference(pool, KEY_MINUTE).await?);

    Ok(RunPreferences {
        location,
        hour,
        minute,
    })
}

/// Persist the location and run time after a successful search.
pub async fn save_preferences(
    pool: &SqlitePool,
    location: &str,
    run_time: RunTime,
) -> Result<(), sqlx::Error> {
    upsert_preference(pool, KEY_LOCATION, location.trim()).await?;
    upsert_preference(pool, KEY_HOUR, &run_time.hour().to_string()).await?;
    upsert_preference(pool, KEY_MINUTE, &run_time.minute().to_string()).await?;
    Ok(())
}
