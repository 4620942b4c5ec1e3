//! PostgreSQL persistence adapters.
//!
//! One Diesel-backed repository per domain port, a shared connection pool,
//! the shared error classification, and the embedded migration runner.

mod diesel_articles_repository;
mod diesel_comments_repository;
mod diesel_topics_repository;
mod diesel_users_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;
mod seed;

pub use diesel_articles_repository::DieselArticlesRepository;
pub use diesel_comments_repository::DieselCommentsRepository;
pub use diesel_topics_repository::DieselTopicsRepository;
pub use diesel_users_repository::DieselUsersRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use seed::seed_example_data;

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

use crate::domain::ports::RepositoryError;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Apply any pending migrations over a short-lived synchronous connection.
///
/// Called once at startup before the pool serves traffic.
///
/// # Errors
///
/// Returns [`RepositoryError::Connection`] when the database is
/// unreachable and [`RepositoryError::Query`] when a migration fails.
pub fn run_migrations(database_url: &str) -> Result<(), RepositoryError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| RepositoryError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| RepositoryError::query(err.to_string()))?;
    info!(count = applied.len(), "database migrations applied");
    Ok(())
}
