use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub const DEFAULT_LOCAL_DB: &str = "sqlite://task-manager.db";

/// Opens the configured database, falling back to the local default store if
/// the configured one is unreachable at startup. The fallback happens once,
/// is logged, and is never retried afterward.
pub async fn connect_with_fallback(database_url: Option<&str>) -> Result<SqlitePool, sqlx::Error> {
    let Some(url) = database_url else {
        tracing::info!("DATABASE_URL not set, using local default {DEFAULT_LOCAL_DB}");
        return connect(DEFAULT_LOCAL_DB).await;
    };

    match connect(url).await {
        Ok(pool) => {
            tracing::info!("connected to configured database");
            Ok(pool)
        }
        Err(err) if url != DEFAULT_LOCAL_DB => {
            tracing::warn!(
                "configured database unreachable ({err}), falling back to {DEFAULT_LOCAL_DB}"
            );
            connect(DEFAULT_LOCAL_DB).await
        }
        Err(err) => Err(err),
    }
}

async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
