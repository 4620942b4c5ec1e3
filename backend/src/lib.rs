//! Newswire backend library modules.
//!
//! A JSON REST API over a small relational news dataset: topics, articles,
//! comments and users. The domain layer owns entities, validation targets
//! and ports; `inbound::http` adapts them to Actix; `outbound::persistence`
//! implements the ports over Diesel/PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface, also served by `GET /api`.
pub use doc::ApiDoc;
