//! HTTP inbound adapter exposing the REST endpoints.

pub mod api_index;
pub mod articles;
pub mod comments;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod topics;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register the full `/api` routing table on a service config.
///
/// Used by the server bootstrap and by handler tests, so both always run
/// the same table. The caller supplies `HttpState` app data and the
/// unmatched-route fallback.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api_index::list_endpoints)
            .service(topics::list_topics)
            .service(topics::create_topic)
            .service(articles::list_articles)
            .service(articles::create_article)
            .service(articles::get_article)
            .service(articles::patch_article_votes)
            .service(articles::delete_article)
            .service(articles::list_article_comments)
            .service(articles::create_comment)
            .service(comments::patch_comment_votes)
            .service(comments::delete_comment)
            .service(users::list_users)
            .service(users::get_user),
    );
}
