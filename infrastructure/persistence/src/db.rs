use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{path::Path, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the local storage database
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a SQLite connection pool, creating the database file if needed
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.connection_string)
        .map_err(|_| DatabaseError::ConnectionError)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &SqlitePool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationError)
}

#[cfg(test)]
pub(crate) mod test_pool {
    use super::*;

    /// In-memory database with the real migrations applied. One connection, so every
    /// query sees the same database.
    pub async fn migrated() -> SqlitePool {
        let mut config = DatabaseConfig::new("sqlite::memory:".to_string());
        config.max_connections = 1;
        let pool = create_sqlite_pool(&config).await.unwrap();
        run_migrations(&pool, concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"))
            .await
            .unwrap();
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fail_on_missing_migrations_directory() {
        let mut config = DatabaseConfig::new("sqlite::memory:".to_string());
        config.max_connections = 1;
        let pool = create_sqlite_pool(&config).await.unwrap();

        let result = run_migrations(&pool, "/definitely/not/here").await;

        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }

    #[tokio::test]
    async fn should_apply_migrations_twice() {
        let pool = test_pool::migrated().await;
        let result = run_migrations(&pool, concat!(env!("CARGO_MANIFEST_DIR"), "/migrations")).await;
        assert!(result.is_ok());
    }
}
