//! Topic aggregate.

use serde::Serialize;
use utoipa::ToSchema;

/// A discussion topic. The slug is the primary key; topics are created by
/// seeding or via `POST /api/topics` and are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Topic {
    /// Unique, URL-safe identifier.
    #[schema(example = "coding")]
    pub slug: String,
    /// Human-readable description.
    #[schema(example = "Code is love, code is life")]
    pub description: String,
}

/// Payload for creating a topic, already validated as non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    /// Slug for the new topic; must not collide with an existing one.
    pub slug: String,
    /// Description for the new topic.
    pub description: String,
}
