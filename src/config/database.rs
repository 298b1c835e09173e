//! Database configuration
//!
//! Connection handling for the SQLite store via SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://garage.db".to_string()),
            max_connections: 5,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
        }
    }
}

impl DatabaseConfig {
    /// Create a new connection pool
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .connect_with(options)
            .await
    }

    /// Create an in-memory pool for testing
    ///
    /// A single connection keeps every query on the same in-memory database.
    pub async fn create_test_pool() -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(Duration::from_secs(60))
            .connect_with(options)
            .await
    }
}

/// Create the three tables if they do not exist yet.
///
/// AUTOINCREMENT keeps row ids monotonic so an id is never reused after a
/// delete. Table and column names are part of the payload contract consumed
/// by the presentation layer.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS automobili (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            marka TEXT NOT NULL,
            model TEXT NOT NULL,
            registracija TEXT NOT NULL,
            kilometri INTEGER NOT NULL,
            vlasnik TEXT NOT NULL,
            godina_proizvodnje INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS popravci_u_tijeku (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            automobil_id INTEGER NOT NULL REFERENCES automobili(id),
            opis TEXT NOT NULL,
            datum TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS povijest_popravaka (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            automobil_id INTEGER NOT NULL REFERENCES automobili(id),
            opis TEXT NOT NULL,
            datum TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
