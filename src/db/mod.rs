//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all registry data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::Path;
use std::str::FromStr;

/// Ordered migration scripts. Index 0 is schema version 1.
///
/// Additive-only: scripts may create tables and add columns, never drop or
/// alter existing ones. Each script runs in its own transaction together with
/// the version bump, so a partially applied migration is never recorded.
const MIGRATIONS: &[&str] = &[
    // v1: base members and scans tables
    r#"
    CREATE TABLE members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_number TEXT UNIQUE,
        full_name TEXT NOT NULL,
        rank TEXT NOT NULL,
        responsibility TEXT NOT NULL,
        phone_number TEXT NOT NULL,
        photo_url TEXT,
        created_at TEXT NOT NULL
    );

    CREATE TABLE scans (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        member_id INTEGER NOT NULL,
        scan_time TEXT NOT NULL,
        scanner_info TEXT,
        FOREIGN KEY (member_id) REFERENCES members(id)
    );

    CREATE INDEX idx_members_full_name ON members(full_name);
    CREATE INDEX idx_members_id_number ON members(id_number);
    "#,
    // v2: card artwork columns for the printable ID layout
    r#"
    ALTER TABLE members ADD COLUMN left_flag_url TEXT;
    ALTER TABLE members ADD COLUMN center_logo_url TEXT;
    ALTER TABLE members ADD COLUMN right_flag_url TEXT;
    "#,
];

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run pending database migrations.
///
/// Idempotent: the schema version stored in `meta` decides which scripts still
/// need to run, so calling this on every startup is safe for any prior schema.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meta (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            schema_version INTEGER NOT NULL DEFAULT 0
        );

        INSERT OR IGNORE INTO meta (id, schema_version) VALUES (1, 0);
        "#,
    )
    .execute(pool)
    .await?;

    let row = sqlx::query("SELECT schema_version FROM meta WHERE id = 1")
        .fetch_one(pool)
        .await?;
    let current: i64 = row.get("schema_version");

    for (idx, script) in MIGRATIONS.iter().enumerate() {
        let version = (idx + 1) as i64;
        if version <= current {
            continue;
        }

        let mut tx = pool.begin().await?;
        sqlx::query(script).execute(&mut *tx).await?;
        sqlx::query("UPDATE meta SET schema_version = ? WHERE id = 1")
            .bind(version)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!("Applied schema migration v{}", version);
    }

    Ok(())
}
