use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::domain::errors::DataResult;

/// Opens the connection pool for `database_url`.
///
/// An in-memory database lives only as long as its connection, so for
/// `sqlite::memory:` style URLs the pool keeps exactly one connection open for
/// its whole lifetime.
pub async fn connect(database_url: &str, max_connections: u32) -> DataResult<SqlitePool> {
    let options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = options.connect(database_url).await?;
    tracing::debug!(database_url, "Database pool opened");

    Ok(pool)
}

/// Creates the drivers table when it does not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> DataResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS drivers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            driver_number INTEGER NOT NULL,
            team TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
