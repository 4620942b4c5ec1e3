//! Domain ports for the storage adapters.
//!
//! Each port is an async trait implemented by the Diesel adapters in
//! `outbound::persistence` and by the in-memory
//! [`FixtureNewsStore`](super::fixture::FixtureNewsStore). Adapters surface
//! failures as [`RepositoryError`] so the HTTP layer can classify them
//! without inspecting driver types.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::articles::{Article, ArticleFilters, ArticleRecord, ArticleSort, ArticleSummary, NewArticle};
use super::comments::{ArticleComment, Comment, NewComment};
use super::error::Error;
use super::topics::{NewTopic, Topic};
use super::users::User;

/// Failures surfaced by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum RepositoryError {
    /// Connectivity failures: pool checkout, closed connections.
    #[error("repository connection failed: {message}")]
    Connection {
        /// Driver-provided detail, logged but never sent to clients.
        message: String,
    },
    /// The storage engine rejected the input representation: foreign-key or
    /// unique violations, invalid value syntax. Classified as a client
    /// error.
    #[error("storage rejected input: {message}")]
    BadInput {
        /// Driver-provided detail.
        message: String,
    },
    /// A list was filtered by a topic slug that does not exist. Raised
    /// before the article query runs so "no such topic" and "topic with no
    /// articles" stay distinguishable.
    #[error("no topic with slug {slug} found")]
    UnknownTopic {
        /// The slug that failed the existence check.
        slug: String,
    },
    /// Comments were requested for an article that does not exist.
    #[error("no article found for comment listing")]
    UnknownArticle,
    /// Any other query failure.
    #[error("repository query failed: {message}")]
    Query {
        /// Driver-provided detail.
        message: String,
    },
}

impl RepositoryError {
    /// Helper for connection-oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for storage-rejected input.
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput {
            message: message.into(),
        }
    }

    /// Helper for the failed topic existence check.
    pub fn unknown_topic(slug: impl Into<String>) -> Self {
        Self::UnknownTopic { slug: slug.into() }
    }

    /// Helper for generic query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Classification of storage failures into client-facing errors.
///
/// Bad input becomes a 400 with the fixed `bad request` message; the failed
/// existence checks become 404s; everything else is internal and will be
/// redacted by the HTTP adapter.
impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::BadInput { .. } => Error::bad_request("bad request"),
            RepositoryError::UnknownTopic { slug } => {
                Error::not_found(format!("no topic with slug {slug} found"))
            }
            RepositoryError::UnknownArticle => Error::not_found("resource not found"),
            RepositoryError::Connection { message } | RepositoryError::Query { message } => {
                Error::internal(message)
            }
        }
    }
}

/// Read/write port for topics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicsRepository: Send + Sync {
    /// All topics.
    async fn list(&self) -> Result<Vec<Topic>, RepositoryError>;

    /// Insert a topic. A duplicate slug surfaces as
    /// [`RepositoryError::BadInput`].
    async fn create(&self, topic: NewTopic) -> Result<Topic, RepositoryError>;
}

/// Read/write port for articles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticlesRepository: Send + Sync {
    /// The full filtered set of article summaries with fresh comment
    /// counts, fully ordered by `sort` (ties broken by descending id).
    ///
    /// Verifies a named topic filter exists before querying and fails with
    /// [`RepositoryError::UnknownTopic`] when it does not. Pagination is
    /// applied by the caller over this materialised set, so window and
    /// total always describe the same set.
    async fn list(
        &self,
        filters: &ArticleFilters,
        sort: ArticleSort,
    ) -> Result<Vec<ArticleSummary>, RepositoryError>;

    /// One article with its fresh comment count, or `None`.
    async fn find(&self, article_id: i32) -> Result<Option<Article>, RepositoryError>;

    /// Insert an article. Unknown author/topic references surface as
    /// [`RepositoryError::BadInput`].
    async fn create(&self, article: NewArticle) -> Result<ArticleRecord, RepositoryError>;

    /// Apply a relative vote adjustment as one atomic update and return the
    /// updated row, or `None` when the id is unknown.
    async fn adjust_votes(
        &self,
        article_id: i32,
        delta: i32,
    ) -> Result<Option<ArticleRecord>, RepositoryError>;

    /// Delete an article (comments cascade). `false` when the id is
    /// unknown.
    async fn delete(&self, article_id: i32) -> Result<bool, RepositoryError>;
}

/// Read/write port for comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsRepository: Send + Sync {
    /// The full comment set for an article, newest first (ties broken by
    /// descending id), joined with author avatars. Fails with
    /// [`RepositoryError::UnknownArticle`] when the article does not exist,
    /// so an empty list always means "article with no comments".
    async fn list_for_article(
        &self,
        article_id: i32,
    ) -> Result<Vec<ArticleComment>, RepositoryError>;

    /// Insert a comment. Unknown article/author references surface as
    /// [`RepositoryError::BadInput`].
    async fn create(
        &self,
        article_id: i32,
        comment: NewComment,
    ) -> Result<Comment, RepositoryError>;

    /// Apply a relative vote adjustment as one atomic update and return the
    /// updated row, or `None` when the id is unknown.
    async fn adjust_votes(
        &self,
        comment_id: i32,
        delta: i32,
    ) -> Result<Option<Comment>, RepositoryError>;

    /// Delete a comment. `false` when the id is unknown.
    async fn delete(&self, comment_id: i32) -> Result<bool, RepositoryError>;
}

/// Read port for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// All users.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// One user by username, or `None`.
    async fn find(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}
