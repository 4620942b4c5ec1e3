//! Topic HTTP handlers.
//!
//! ```text
//! GET  /api/topics
//! POST /api/topics
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::topics::{NewTopic, Topic};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_text;
use crate::inbound::http::ApiResult;

const TOPIC_SHAPE_MESSAGE: &str =
    "post request must be accompanied by a topic object with valid slug and description keys";

/// Envelope for the topic list.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicsEnvelope {
    /// Every stored topic.
    pub topics: Vec<Topic>,
}

/// Envelope for a freshly created topic.
#[derive(Debug, Serialize, ToSchema)]
pub struct NewTopicEnvelope {
    /// The created topic row.
    #[serde(rename = "newTopic")]
    pub new_topic: Topic,
}

/// Request payload for creating a topic. Unknown extra fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicPayload {
    /// Slug for the new topic.
    pub slug: Option<String>,
    /// Description for the new topic.
    pub description: Option<String>,
}

/// List every topic.
#[utoipa::path(
    get,
    path = "/api/topics",
    responses((status = 200, description = "All topics", body = TopicsEnvelope)),
    tags = ["topics"],
    operation_id = "listTopics"
)]
#[get("/topics")]
pub async fn list_topics(state: web::Data<HttpState>) -> ApiResult<web::Json<TopicsEnvelope>> {
    let topics = state.topics.list().await?;
    Ok(web::Json(TopicsEnvelope { topics }))
}

/// Create a topic.
#[utoipa::path(
    post,
    path = "/api/topics",
    request_body = TopicPayload,
    responses(
        (status = 201, description = "Topic created", body = NewTopicEnvelope),
        (status = 400, description = "Missing fields or duplicate slug", body = ErrorSchema)
    ),
    tags = ["topics"],
    operation_id = "createTopic"
)]
#[post("/topics")]
pub async fn create_topic(
    state: web::Data<HttpState>,
    payload: web::Json<TopicPayload>,
) -> ApiResult<HttpResponse> {
    let TopicPayload { slug, description } = payload.into_inner();
    let new_topic = NewTopic {
        slug: require_text(slug, TOPIC_SHAPE_MESSAGE)?,
        description: require_text(description, TOPIC_SHAPE_MESSAGE)?,
    };
    let created = state.topics.create(new_topic).await?;
    Ok(HttpResponse::Created().json(NewTopicEnvelope { new_topic: created }))
}

#[cfg(test)]
#[path = "topics_tests.rs"]
mod tests;
