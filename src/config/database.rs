//! Database configuration and connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable.
//! Pending migrations under `migrations/` are applied on startup.

use sqlx::PgPool;
use std::env;

/// Initializes a PostgreSQL connection pool and runs migrations.
///
/// Called once during application startup; the returned pool is cheaply
/// cloneable and lives inside the application state.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
/// - A migration fails to apply
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
