//! Comment HTTP handlers.
//!
//! ```text
//! PATCH  /api/comments/{comment_id}
//! DELETE /api/comments/{comment_id}
//! ```

use actix_web::{delete, patch, web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::comments::Comment;
use crate::domain::Error;
use crate::inbound::http::articles::VotePatchPayload;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_id, IdField};
use crate::inbound::http::ApiResult;

const VOTE_SHAPE_MESSAGE: &str =
    "patch request must be accompanied with an object with inc_votes key";

/// Envelope for a vote-adjusted comment.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedCommentEnvelope {
    /// The stored row after the atomic increment.
    #[serde(rename = "updatedComment")]
    pub updated_comment: Comment,
}

fn no_comment_with(comment_id: i32) -> Error {
    Error::not_found(format!("no comment with an id of {comment_id}"))
}

/// Adjust a comment's votes by a relative increment.
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Integer comment id")),
    request_body = VotePatchPayload,
    responses(
        (status = 200, description = "Updated comment", body = UpdatedCommentEnvelope),
        (status = 400, description = "Bad id or body", body = ErrorSchema),
        (status = 404, description = "No such comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "patchCommentVotes"
)]
#[patch("/comments/{comment_id}")]
pub async fn patch_comment_votes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<VotePatchPayload>,
) -> ApiResult<web::Json<UpdatedCommentEnvelope>> {
    let comment_id = parse_id(&path, IdField::Comment)?;
    let delta = payload
        .inc_votes
        .ok_or_else(|| Error::bad_request(VOTE_SHAPE_MESSAGE))?;
    let updated = state
        .comments
        .adjust_votes(comment_id, delta)
        .await?
        .ok_or_else(|| no_comment_with(comment_id))?;
    Ok(web::Json(UpdatedCommentEnvelope {
        updated_comment: updated,
    }))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Integer comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Non-integer id", body = ErrorSchema),
        (status = 404, description = "No such comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "deleteComment"
)]
#[delete("/comments/{comment_id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let comment_id = parse_id(&path, IdField::Comment)?;
    if state.comments.delete(comment_id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(no_comment_with(comment_id))
    }
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
