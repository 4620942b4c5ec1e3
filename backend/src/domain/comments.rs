//! Comment aggregate.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A comment row as stored. This is the shape returned by writes
/// (`RETURNING *`): creation and vote patches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Comment {
    /// Generated primary key.
    pub comment_id: i32,
    /// Comment text.
    pub body: String,
    /// Article this comment belongs to; deleted along with it.
    pub article_id: i32,
    /// Username of the author.
    pub author: String,
    /// Vote tally, adjusted only by relative increments.
    pub votes: i32,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Listing view: the stored row joined against the author's user record to
/// surface the avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArticleComment {
    /// Generated primary key.
    pub comment_id: i32,
    /// Comment text.
    pub body: String,
    /// Article this comment belongs to.
    pub article_id: i32,
    /// Username of the author.
    pub author: String,
    /// Vote tally.
    pub votes: i32,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Author's profile image, from the users table.
    pub avatar_url: String,
}

/// Payload for posting a comment, already validated as non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Author username; must reference an existing user.
    pub author: String,
    /// Comment text.
    pub body: String,
}
