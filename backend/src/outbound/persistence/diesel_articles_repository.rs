//! PostgreSQL-backed articles repository.
//!
//! The list and detail reads are aggregation queries: articles left-joined
//! to comments, grouped by article, selecting a derived comment count.
//! Data values (topic, author, ids) are always bound parameters; the sort
//! column and direction are interpolated only from the closed
//! [`SortColumn`]/[`SortOrder`] enums, so no client string ever reaches
//! the SQL text.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Integer, Text};
use diesel_async::RunQueryDsl;

use crate::domain::articles::{
    Article, ArticleFilters, ArticleRecord, ArticleSort, ArticleSummary, NewArticle, SortColumn,
    SortOrder,
};
use crate::domain::ports::{ArticlesRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ArticleDetailRow, ArticleRow, ArticleSummaryRow, NewArticleRow};
use super::pool::DbPool;
use super::schema::{articles, topics};

/// Diesel-backed implementation of the articles port.
#[derive(Clone)]
pub struct DieselArticlesRepository {
    pool: DbPool,
}

impl DieselArticlesRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const LIST_ARTICLES_SQL: &str = "\
SELECT articles.article_id, articles.author, articles.title, articles.topic, \
       articles.created_at, articles.votes, articles.article_img_url, \
       COUNT(comments.comment_id) AS comment_count \
  FROM articles \
  LEFT JOIN comments ON comments.article_id = articles.article_id \
 WHERE ($1 = 'all' OR articles.topic = $1) \
   AND ($2 = 'all' OR articles.author = $2) \
 GROUP BY articles.article_id \
 ORDER BY ";

const FIND_ARTICLE_SQL: &str = "\
SELECT articles.article_id, articles.author, articles.title, articles.body, \
       articles.topic, articles.created_at, articles.votes, articles.article_img_url, \
       COUNT(comments.comment_id) AS comment_count \
  FROM articles \
  LEFT JOIN comments ON comments.article_id = articles.article_id \
 WHERE articles.article_id = $1 \
 GROUP BY articles.article_id";

/// Append the validated sort clause. `column` and `order` render to static
/// identifiers; the trailing id sort keeps windows stable under ties.
fn list_articles_sql(sort: ArticleSort) -> String {
    let ArticleSort { column, order } = sort;
    let mut sql = String::from(LIST_ARTICLES_SQL);
    sql.push_str(column.as_sql());
    sql.push(' ');
    sql.push_str(order.as_sql());
    if !matches!(column, SortColumn::ArticleId) {
        sql.push_str(", articles.article_id DESC");
    }
    sql
}

#[async_trait]
impl ArticlesRepository for DieselArticlesRepository {
    async fn list(
        &self,
        filters: &ArticleFilters,
        sort: ArticleSort,
    ) -> Result<Vec<ArticleSummary>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        if let Some(slug) = filters.topic_filter() {
            let topic_exists: bool = diesel::select(exists(topics::table.find(slug)))
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            if !topic_exists {
                return Err(RepositoryError::unknown_topic(slug));
            }
        }

        let rows: Vec<ArticleSummaryRow> = sql_query(list_articles_sql(sort))
            .bind::<Text, _>(&filters.topic)
            .bind::<Text, _>(&filters.author)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(ArticleSummary::from).collect())
    }

    async fn find(&self, article_id: i32) -> Result<Option<Article>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ArticleDetailRow> = sql_query(FIND_ARTICLE_SQL)
            .bind::<Integer, _>(article_id)
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Article::from))
    }

    async fn create(&self, article: NewArticle) -> Result<ArticleRecord, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewArticleRow {
            author: &article.author,
            title: &article.title,
            body: &article.body,
            topic: &article.topic,
            article_img_url: &article.article_img_url,
        };
        let inserted: ArticleRow = diesel::insert_into(articles::table)
            .values(&new_row)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(ArticleRecord::from(inserted))
    }

    async fn adjust_votes(
        &self,
        article_id: i32,
        delta: i32,
    ) -> Result<Option<ArticleRecord>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Single relative update evaluated by the database, so concurrent
        // increments on the same row are both reflected.
        let updated: Option<ArticleRow> = diesel::update(articles::table.find(article_id))
            .set(articles::votes.eq(articles::votes + delta))
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(updated.map(ArticleRecord::from))
    }

    async fn delete(&self, article_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Comment rows go with the article via the FK cascade.
        let deleted = diesel::delete(articles::table.find(article_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
