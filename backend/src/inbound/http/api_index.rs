//! Self-describing API index.
//!
//! ```text
//! GET /api
//! ```
//!
//! Serves the generated OpenAPI document, so the endpoint list the clients
//! see is derived from the same annotations that document the handlers.

use actix_web::{get, HttpResponse};
use utoipa::OpenApi;

use crate::doc::ApiDoc;

/// Describe every available endpoint.
#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "OpenAPI description of all endpoints")),
    tags = ["api"],
    operation_id = "listEndpoints"
)]
#[get("")]
pub async fn list_endpoints() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
