//! User aggregate.

use serde::Serialize;
use utoipa::ToSchema;

/// A registered author. Users are seed-created; the API only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    /// Unique login name, referenced by articles and comments.
    #[schema(example = "butter_bridge")]
    pub username: String,
    /// Display name.
    #[schema(example = "jonny")]
    pub name: String,
    /// Profile image URL.
    pub avatar_url: String,
}
