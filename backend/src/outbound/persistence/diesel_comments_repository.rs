//! PostgreSQL-backed comments repository.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::comments::{ArticleComment, Comment, NewComment};
use crate::domain::ports::{CommentsRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::{articles, comments, users};

/// Diesel-backed implementation of the comments port.
#[derive(Clone)]
pub struct DieselCommentsRepository {
    pool: DbPool,
}

impl DieselCommentsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentsRepository for DieselCommentsRepository {
    async fn list_for_article(
        &self,
        article_id: i32,
    ) -> Result<Vec<ArticleComment>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Distinguish "article with no comments" (empty list) from
        // "article does not exist" (not found) before querying.
        let article_exists: bool =
            diesel::select(exists(articles::table.find(article_id)))
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?;
        if !article_exists {
            return Err(RepositoryError::UnknownArticle);
        }

        let rows: Vec<(CommentRow, String)> = comments::table
            .inner_join(users::table)
            .filter(comments::article_id.eq(article_id))
            .order((comments::created_at.desc(), comments::comment_id.desc()))
            .select((CommentRow::as_select(), users::avatar_url))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(row, avatar_url)| row.with_avatar(avatar_url))
            .collect())
    }

    async fn create(
        &self,
        article_id: i32,
        comment: NewComment,
    ) -> Result<Comment, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCommentRow {
            body: &comment.body,
            article_id,
            author: &comment.author,
        };
        // Unknown article or author fail the reference checks and classify
        // as client errors via the shared mapping.
        let inserted: CommentRow = diesel::insert_into(comments::table)
            .values(&new_row)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Comment::from(inserted))
    }

    async fn adjust_votes(
        &self,
        comment_id: i32,
        delta: i32,
    ) -> Result<Option<Comment>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated: Option<CommentRow> = diesel::update(comments::table.find(comment_id))
            .set(comments::votes.eq(comments::votes + delta))
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(updated.map(Comment::from))
    }

    async fn delete(&self, comment_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(comments::table.find(comment_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
