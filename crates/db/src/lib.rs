//! PostgreSQL persistence for the maintdesk back office.
//!
//! Connection pool helpers, embedded migrations, model structs, and the
//! repository layer. Also provides [`SqlDependencyStore`], the database
//! side of the dependency-validation engine.

pub mod dependency_store;
pub mod models;
pub mod repositories;

pub use dependency_store::SqlDependencyStore;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
