//! PostgreSQL-backed users repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, UsersRepository};
use crate::domain::users::User;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::UserRow;
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the users port.
#[derive(Clone)]
pub struct DieselUsersRepository {
    pool: DbPool,
}

impl DieselUsersRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersRepository for DieselUsersRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(username)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }
}
