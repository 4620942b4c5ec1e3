//! User HTTP handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{username}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::users::User;
use crate::domain::Error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Envelope for the user list.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersEnvelope {
    /// Every registered user.
    pub users: Vec<User>,
}

/// Envelope for a single user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    /// The requested user.
    pub user: User,
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All users", body = UsersEnvelope)),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersEnvelope>> {
    let users = state.users.list().await?;
    Ok(web::Json(UsersEnvelope { users }))
}

/// Fetch one user by username.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Unique login name")),
    responses(
        (status = 200, description = "The user", body = UserEnvelope),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{username}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let username = path.into_inner();
    let user = state
        .users
        .find(&username)
        .await?
        .ok_or_else(|| Error::not_found(format!("no user with username of {username} found")))?;
    Ok(web::Json(UserEnvelope { user }))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
