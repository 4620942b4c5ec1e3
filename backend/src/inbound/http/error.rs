//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn failures into the uniform `{"message": ...}` envelope with the
//! documented status codes. Internal failures are logged here and redacted
//! to a generic message; driver detail never reaches the client.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message substituted for any unclassified failure.
const SERVER_ERROR_MESSAGE: &str = "server error";

/// Message for requests that match no route/method combination.
const INVALID_PATH_MESSAGE: &str = "invalid path";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let message = if matches!(self.code(), ErrorCode::InternalError) {
            error!(cause = %self.message(), "unclassified failure");
            SERVER_ERROR_MESSAGE
        } else {
            self.message()
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}

/// JSON extractor configuration: malformed request bodies become the fixed
/// 400 envelope instead of Actix's default error shape.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default()
        .error_handler(|_err, _req| Error::bad_request("bad request").into())
}

/// Fallback handler for any unmatched route/method combination. Distinct
/// from a well-routed request naming a missing entity.
pub async fn invalid_path() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "message": INVALID_PATH_MESSAGE }))
}
