//! Opening the slot database.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

const SCHEMA: &str = include_str!("schema.sql");

/// Open (creating if needed) the SQLite file at `db_path` and ensure the slot table exists.
///
/// One connection is enough: the tracker is a single-user, single-writer session.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    let path = Path::new(db_path);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;
    info!(path = db_path, "slot database ready");
    Ok(pool)
}

async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}
