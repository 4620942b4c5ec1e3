//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and response schema. The
//! generated document doubles as the `GET /api` response, so the endpoint
//! listing clients receive is always in step with the handlers.

use utoipa::OpenApi;

use crate::domain::articles::{Article, ArticleRecord, ArticleSummary};
use crate::domain::comments::{ArticleComment, Comment};
use crate::domain::topics::Topic;
use crate::domain::users::User;
use crate::inbound::http::articles::{
    ArticleEnvelope, ArticlePayload, ArticlesEnvelope, CommentPayload, CommentsEnvelope,
    NewArticleEnvelope, PostedCommentEnvelope, UpdatedArticleEnvelope, VotePatchPayload,
};
use crate::inbound::http::comments::UpdatedCommentEnvelope;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::topics::{NewTopicEnvelope, TopicPayload, TopicsEnvelope};
use crate::inbound::http::users::{UserEnvelope, UsersEnvelope};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Newswire backend API",
        description = "JSON REST interface over the news dataset: topics, articles, comments and users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::api_index::list_endpoints,
        crate::inbound::http::topics::list_topics,
        crate::inbound::http::topics::create_topic,
        crate::inbound::http::articles::list_articles,
        crate::inbound::http::articles::create_article,
        crate::inbound::http::articles::get_article,
        crate::inbound::http::articles::patch_article_votes,
        crate::inbound::http::articles::delete_article,
        crate::inbound::http::articles::list_article_comments,
        crate::inbound::http::articles::create_comment,
        crate::inbound::http::comments::patch_comment_votes,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        Topic,
        User,
        Article,
        ArticleRecord,
        ArticleSummary,
        Comment,
        ArticleComment,
        TopicsEnvelope,
        NewTopicEnvelope,
        TopicPayload,
        ArticlesEnvelope,
        ArticleEnvelope,
        NewArticleEnvelope,
        UpdatedArticleEnvelope,
        CommentsEnvelope,
        PostedCommentEnvelope,
        UpdatedCommentEnvelope,
        ArticlePayload,
        CommentPayload,
        VotePatchPayload,
        UserEnvelope,
        UsersEnvelope,
        ErrorSchema,
    )),
    tags(
        (name = "api", description = "API self-description"),
        (name = "topics", description = "Topic listing and creation"),
        (name = "articles", description = "Article queries, votes and comments"),
        (name = "comments", description = "Comment votes and deletion"),
        (name = "users", description = "User lookups"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;
