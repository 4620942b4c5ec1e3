//! PostgreSQL-backed topics repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, TopicsRepository};
use crate::domain::topics::{NewTopic, Topic};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTopicRow, TopicRow};
use super::pool::DbPool;
use super::schema::topics;

/// Diesel-backed implementation of the topics port.
#[derive(Clone)]
pub struct DieselTopicsRepository {
    pool: DbPool,
}

impl DieselTopicsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicsRepository for DieselTopicsRepository {
    async fn list(&self) -> Result<Vec<Topic>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TopicRow> = topics::table
            .select(TopicRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn create(&self, topic: NewTopic) -> Result<Topic, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTopicRow {
            slug: &topic.slug,
            description: &topic.description,
        };
        // A duplicate slug fails the primary key and classifies as a
        // client error via the shared mapping.
        let inserted: TopicRow = diesel::insert_into(topics::table)
            .values(&new_row)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Topic::from(inserted))
    }
}
