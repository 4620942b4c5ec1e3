//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; converted into domain
//! types before leaving it. The `QueryableByName` rows back the raw
//! aggregation queries that compute comment counts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text, Timestamptz};

use crate::domain::articles::{Article, ArticleRecord, ArticleSummary};
use crate::domain::comments::{ArticleComment, Comment};
use crate::domain::topics::Topic;
use crate::domain::users::User;

use super::schema::{articles, comments, topics, users};

/// Row struct for reading from the topics table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TopicRow {
    pub slug: String,
    pub description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Self {
            slug: row.slug,
            description: row.description,
        }
    }
}

/// Insertable struct for creating topic records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = topics)]
pub(crate) struct NewTopicRow<'a> {
    pub slug: &'a str,
    pub description: &'a str,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            username: row.username,
            name: row.name,
            avatar_url: row.avatar_url,
        }
    }
}

/// Insertable struct for seeding user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub avatar_url: &'a str,
}

/// Row struct for reading whole article rows (writes use `RETURNING *`).
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

impl From<ArticleRow> for ArticleRecord {
    fn from(row: ArticleRow) -> Self {
        Self {
            article_id: row.article_id,
            author: row.author,
            title: row.title,
            body: row.body,
            topic: row.topic,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
        }
    }
}

/// Insertable struct for creating article records. Timestamp, votes and a
/// missing image URL fall back to column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub(crate) struct NewArticleRow<'a> {
    pub author: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub topic: &'a str,
    pub article_img_url: &'a str,
}

/// Row struct for reading whole comment rows (writes use `RETURNING *`).
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub comment_id: i32,
    pub body: String,
    pub article_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            comment_id: row.comment_id,
            body: row.body,
            article_id: row.article_id,
            author: row.author,
            votes: row.votes,
            created_at: row.created_at,
        }
    }
}

impl CommentRow {
    /// Pair a comment row with its author's avatar from the joined users
    /// table.
    pub(crate) fn with_avatar(self, avatar_url: String) -> ArticleComment {
        ArticleComment {
            comment_id: self.comment_id,
            body: self.body,
            article_id: self.article_id,
            author: self.author,
            votes: self.votes,
            created_at: self.created_at,
            avatar_url,
        }
    }
}

/// Insertable struct for creating comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub body: &'a str,
    pub article_id: i32,
    pub author: &'a str,
}

/// Result row of the article list aggregation query: article columns minus
/// the body, plus the comment count aggregate.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct ArticleSummaryRow {
    #[diesel(sql_type = Integer)]
    pub article_id: i32,
    #[diesel(sql_type = Text)]
    pub author: String,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub topic: String,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Integer)]
    pub votes: i32,
    #[diesel(sql_type = Text)]
    pub article_img_url: String,
    #[diesel(sql_type = BigInt)]
    pub comment_count: i64,
}

impl From<ArticleSummaryRow> for ArticleSummary {
    fn from(row: ArticleSummaryRow) -> Self {
        Self {
            article_id: row.article_id,
            author: row.author,
            title: row.title,
            topic: row.topic,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        }
    }
}

/// Result row of the article detail aggregation query: every article
/// column plus the comment count aggregate.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct ArticleDetailRow {
    #[diesel(sql_type = Integer)]
    pub article_id: i32,
    #[diesel(sql_type = Text)]
    pub author: String,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub body: String,
    #[diesel(sql_type = Text)]
    pub topic: String,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = Integer)]
    pub votes: i32,
    #[diesel(sql_type = Text)]
    pub article_img_url: String,
    #[diesel(sql_type = BigInt)]
    pub comment_count: i64,
}

impl From<ArticleDetailRow> for Article {
    fn from(row: ArticleDetailRow) -> Self {
        Self {
            article_id: row.article_id,
            author: row.author,
            title: row.title,
            body: row.body,
            topic: row.topic,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        }
    }
}
