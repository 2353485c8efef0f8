use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

/// Initialize the local storage database and apply its migrations
///
/// Environment variables:
/// - LOCAL_STORAGE_URL: SQLite connection string (default: "sqlite://storefront.db")
/// - LOCAL_STORAGE_MIGRATIONS: Migrations directory
///   (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_local_storage() -> anyhow::Result<SqlitePool> {
    let url = env::var("LOCAL_STORAGE_URL").unwrap_or_else(|_| "sqlite://storefront.db".to_string());
    let migrations = env::var("LOCAL_STORAGE_MIGRATIONS")
        .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());

    let pool = create_sqlite_pool(&DatabaseConfig::new(url)).await?;
    run_migrations(&pool, &migrations).await?;
    Ok(pool)
}
