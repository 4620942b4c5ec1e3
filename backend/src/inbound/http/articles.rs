//! Article HTTP handlers.
//!
//! ```text
//! GET    /api/articles
//! POST   /api/articles
//! GET    /api/articles/{article_id}
//! PATCH  /api/articles/{article_id}
//! DELETE /api/articles/{article_id}
//! GET    /api/articles/{article_id}/comments
//! POST   /api/articles/{article_id}/comments
//! ```

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::articles::{
    Article, ArticleFilters, ArticleRecord, ArticleSort, ArticleSummary, NewArticle,
    DEFAULT_ARTICLE_IMG_URL, FILTER_ALL,
};
use crate::domain::comments::{ArticleComment, Comment, NewComment};
use crate::domain::Error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_id, parse_order_param, parse_page_params, parse_sort_param, require_text, IdField,
};
use crate::inbound::http::ApiResult;

const ARTICLE_SHAPE_MESSAGE: &str =
    "post request must be accompanied by an article object with valid author, title, body and topic keys";
const COMMENT_SHAPE_MESSAGE: &str =
    "post request must be accompanied by a comment object with valid username and body keys";
const VOTE_SHAPE_MESSAGE: &str =
    "patch request must be accompanied with an object with inc_votes key";

/// Query parameters accepted by the article list. Kept as raw strings so
/// the validation layer owns every rejection message.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    /// Topic slug filter.
    pub topic: Option<String>,
    /// Author username filter.
    pub author: Option<String>,
    /// Whitelisted sort column.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
    /// Window size.
    pub limit: Option<String>,
    /// One-based page number.
    pub p: Option<String>,
}

/// Query parameters accepted by the comment list.
#[derive(Debug, Default, Deserialize)]
pub struct CommentListParams {
    /// Window size.
    pub limit: Option<String>,
    /// One-based page number.
    pub p: Option<String>,
}

/// Envelope for the article list. The total always counts the full
/// filtered set, not the returned window.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticlesEnvelope {
    /// One window of the filtered, sorted set; bodies are never included
    /// in list view.
    pub articles: Vec<ArticleSummary>,
    /// Size of the filtered set before pagination.
    pub total_count: i64,
}

/// Envelope for the article detail view.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleEnvelope {
    /// The article, body included, with a fresh comment count.
    pub article: Article,
}

/// Envelope for a freshly created article.
#[derive(Debug, Serialize, ToSchema)]
pub struct NewArticleEnvelope {
    /// The created article; a new article always reports zero comments.
    #[serde(rename = "newArticle")]
    pub new_article: Article,
}

/// Envelope for a vote-adjusted article.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedArticleEnvelope {
    /// The stored row after the atomic increment.
    #[serde(rename = "updatedArticle")]
    pub updated_article: ArticleRecord,
}

/// Envelope for an article's comment list.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentsEnvelope {
    /// One window of the article's comments, newest first.
    pub comments: Vec<ArticleComment>,
    /// Number of comments on the article before pagination.
    pub total_comments: i64,
}

/// Envelope for a freshly posted comment.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostedCommentEnvelope {
    /// The created comment row.
    #[serde(rename = "postedComment")]
    pub posted_comment: Comment,
}

/// Request payload for creating an article. Unknown extra fields are
/// ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticlePayload {
    /// Author username.
    pub author: Option<String>,
    /// Headline.
    pub title: Option<String>,
    /// Article text.
    pub body: Option<String>,
    /// Topic slug.
    pub topic: Option<String>,
    /// Optional cover image; a fixed placeholder is applied when omitted.
    pub article_img_url: Option<String>,
}

/// Request payload for posting a comment.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentPayload {
    /// Author username.
    pub username: Option<String>,
    /// Comment text.
    pub body: Option<String>,
}

/// Request payload for a relative vote adjustment.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VotePatchPayload {
    /// Signed delta applied atomically to the stored tally.
    pub inc_votes: Option<i32>,
}

fn filters_from(params: &ArticleListParams) -> ArticleFilters {
    ArticleFilters {
        topic: params
            .topic
            .clone()
            .unwrap_or_else(|| FILTER_ALL.to_owned()),
        author: params
            .author
            .clone()
            .unwrap_or_else(|| FILTER_ALL.to_owned()),
    }
}

/// List articles with filtering, sorting and pagination.
#[utoipa::path(
    get,
    path = "/api/articles",
    params(
        ("topic" = Option<String>, Query, description = "Restrict to one topic slug"),
        ("author" = Option<String>, Query, description = "Restrict to one author username"),
        ("sort_by" = Option<String>, Query, description = "Whitelisted article column, default created_at"),
        ("order" = Option<String>, Query, description = "asc or desc, default desc"),
        ("limit" = Option<String>, Query, description = "Window size, default 10"),
        ("p" = Option<String>, Query, description = "One-based page number, default 1")
    ),
    responses(
        (status = 200, description = "One window of the filtered set", body = ArticlesEnvelope),
        (status = 400, description = "Bad sort, order or window parameters", body = ErrorSchema),
        (status = 404, description = "Unknown topic", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "listArticles"
)]
#[get("/articles")]
pub async fn list_articles(
    state: web::Data<HttpState>,
    params: web::Query<ArticleListParams>,
) -> ApiResult<web::Json<ArticlesEnvelope>> {
    let sort = ArticleSort {
        column: parse_sort_param(params.sort_by.as_deref())?,
        order: parse_order_param(params.order.as_deref())?,
    };
    let window = parse_page_params(params.limit.as_deref(), params.p.as_deref())?;
    let filters = filters_from(&params);

    let summaries = state.articles.list(&filters, sort).await?;
    let page = window.slice(summaries);
    Ok(web::Json(ArticlesEnvelope {
        articles: page.items,
        total_count: page.total_count,
    }))
}

/// Fetch one article with its comment count.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Integer article id")),
    responses(
        (status = 200, description = "The article", body = ArticleEnvelope),
        (status = 400, description = "Non-integer id", body = ErrorSchema),
        (status = 404, description = "No such article", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "getArticle"
)]
#[get("/articles/{article_id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ArticleEnvelope>> {
    let article_id = parse_id(&path, IdField::Article)?;
    let article = state
        .articles
        .find(article_id)
        .await?
        .ok_or_else(|| Error::not_found("resource not found"))?;
    Ok(web::Json(ArticleEnvelope { article }))
}

/// Create an article.
#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticlePayload,
    responses(
        (status = 201, description = "Article created", body = NewArticleEnvelope),
        (status = 400, description = "Missing fields or unknown references", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "createArticle"
)]
#[post("/articles")]
pub async fn create_article(
    state: web::Data<HttpState>,
    payload: web::Json<ArticlePayload>,
) -> ApiResult<HttpResponse> {
    let ArticlePayload {
        author,
        title,
        body,
        topic,
        article_img_url,
    } = payload.into_inner();
    let new_article = NewArticle {
        author: require_text(author, ARTICLE_SHAPE_MESSAGE)?,
        title: require_text(title, ARTICLE_SHAPE_MESSAGE)?,
        body: require_text(body, ARTICLE_SHAPE_MESSAGE)?,
        topic: require_text(topic, ARTICLE_SHAPE_MESSAGE)?,
        article_img_url: article_img_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_owned()),
    };
    let record = state.articles.create(new_article).await?;
    Ok(HttpResponse::Created().json(NewArticleEnvelope {
        new_article: Article::from_new_record(record),
    }))
}

/// Adjust an article's votes by a relative increment.
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Integer article id")),
    request_body = VotePatchPayload,
    responses(
        (status = 200, description = "Updated article", body = UpdatedArticleEnvelope),
        (status = 400, description = "Bad id or body", body = ErrorSchema),
        (status = 404, description = "No such article", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "patchArticleVotes"
)]
#[patch("/articles/{article_id}")]
pub async fn patch_article_votes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<VotePatchPayload>,
) -> ApiResult<web::Json<UpdatedArticleEnvelope>> {
    let article_id = parse_id(&path, IdField::Article)?;
    let delta = payload
        .inc_votes
        .ok_or_else(|| Error::bad_request(VOTE_SHAPE_MESSAGE))?;
    let updated = state
        .articles
        .adjust_votes(article_id, delta)
        .await?
        .ok_or_else(|| Error::not_found("resource not found"))?;
    Ok(web::Json(UpdatedArticleEnvelope {
        updated_article: updated,
    }))
}

/// Delete an article; its comments cascade away with it.
#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Integer article id")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 400, description = "Non-integer id", body = ErrorSchema),
        (status = 404, description = "No such article", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "deleteArticle"
)]
#[delete("/articles/{article_id}")]
pub async fn delete_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let article_id = parse_id(&path, IdField::Article)?;
    if state.articles.delete(article_id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found("resource not found"))
    }
}

/// List an article's comments, newest first, paginated.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(
        ("article_id" = String, Path, description = "Integer article id"),
        ("limit" = Option<String>, Query, description = "Window size, default 10"),
        ("p" = Option<String>, Query, description = "One-based page number, default 1")
    ),
    responses(
        (status = 200, description = "One window of the article's comments", body = CommentsEnvelope),
        (status = 400, description = "Bad id or window parameters", body = ErrorSchema),
        (status = 404, description = "No such article", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "listArticleComments"
)]
#[get("/articles/{article_id}/comments")]
pub async fn list_article_comments(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<CommentListParams>,
) -> ApiResult<web::Json<CommentsEnvelope>> {
    let article_id = parse_id(&path, IdField::Article)?;
    let window = parse_page_params(params.limit.as_deref(), params.p.as_deref())?;
    let comments = state.comments.list_for_article(article_id).await?;
    let page = window.slice(comments);
    Ok(web::Json(CommentsEnvelope {
        comments: page.items,
        total_comments: page.total_count,
    }))
}

/// Post a comment to an article.
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Integer article id")),
    request_body = CommentPayload,
    responses(
        (status = 201, description = "Comment created", body = PostedCommentEnvelope),
        (status = 400, description = "Missing fields or unknown article/user", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "postComment"
)]
#[post("/articles/{article_id}/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CommentPayload>,
) -> ApiResult<HttpResponse> {
    let article_id = parse_id(&path, IdField::Article)?;
    let CommentPayload { username, body } = payload.into_inner();
    let new_comment = NewComment {
        author: require_text(username, COMMENT_SHAPE_MESSAGE)?,
        body: require_text(body, COMMENT_SHAPE_MESSAGE)?,
    };
    let posted = state.comments.create(article_id, new_comment).await?;
    Ok(HttpResponse::Created().json(PostedCommentEnvelope {
        posted_comment: posted,
    }))
}

#[cfg(test)]
#[path = "articles_tests.rs"]
mod tests;
