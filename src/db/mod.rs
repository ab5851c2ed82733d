pub mod models;
pub mod queries;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::errors::AppError;

/// One writer is enough for a single-shot CLI.
const DB_POOL_MAX_CONNECTIONS: u32 = 1;

/// Open the preferences database and apply pending migrations.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(DB_POOL_MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::debug!("Preferences database ready");

    Ok(pool)
}
