//! Store access layer: connection pool, schema migrations, and the movie
//! repository.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Create a connection pool from a database URL.
///
/// The pool connects lazily: construction succeeds even when the database
/// is unreachable, and individual operations fail instead. The service must
/// keep serving (and failing requests one at a time) when the store is down.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_lazy(database_url)
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
