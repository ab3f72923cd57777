//! SQLite module

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::debug;

mod emails;

/// Database connection
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    /// The database connection pool
    pub pool: SqlitePool,
}

impl SqliteDatabase {
    /// Connect to the database, creating the file if needed, and run pending migrations
    #[mutants::skip]
    pub async fn new(connection_string: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .with_context(|| format!("invalid database url \"{connection_string}\""))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .context("failed to connect to the database")?;

        Self::migrate(pool).await
    }

    /// Create a private in-memory database, used by tests and throwaway runs
    pub async fn new_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // every connection to :memory: is a separate database, so keep exactly one alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open in-memory database")?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run database migrations")?;

        debug!("database migrations applied");

        Ok(Self { pool })
    }

    /// Returns the underlying database connection
    pub fn connection(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Database connection details
#[derive(Debug, Clone, Parser)]
pub struct DatabaseConnectionDetails {
    /// The database connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://mail.db")]
    pub connection_string: String,
}
