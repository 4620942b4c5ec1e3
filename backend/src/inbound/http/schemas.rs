//! OpenAPI schema wrappers for payloads without their own derives.

use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorSchema {
    /// Client-facing description of the failure.
    #[schema(example = "bad request")]
    pub message: String,
}
