//! Article aggregate: records, read views, list filters and sort whitelist.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Image applied when a write omits `article_img_url`.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

/// An article row as stored, without derived attributes. This is the shape
/// returned by writes (`RETURNING *`): creation and vote patches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArticleRecord {
    /// Generated primary key.
    pub article_id: i32,
    /// Username of the author; references an existing user.
    pub author: String,
    /// Headline.
    pub title: String,
    /// Full article text.
    pub body: String,
    /// Slug of the topic this article belongs to.
    pub topic: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Vote tally, adjusted only by relative increments.
    pub votes: i32,
    /// Cover image URL.
    pub article_img_url: String,
}

/// Detail view: the stored row plus the derived comment count, computed
/// fresh from the comments table at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Article {
    /// Generated primary key.
    pub article_id: i32,
    /// Username of the author.
    pub author: String,
    /// Headline.
    pub title: String,
    /// Full article text.
    pub body: String,
    /// Topic slug.
    pub topic: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Vote tally.
    pub votes: i32,
    /// Cover image URL.
    pub article_img_url: String,
    /// Number of comments referencing this article. Kept as the storage
    /// engine's native aggregate width.
    pub comment_count: i64,
}

impl Article {
    /// View of a freshly inserted record. A new article has no comments yet,
    /// so the count is zero without a round-trip read.
    pub fn from_new_record(record: ArticleRecord) -> Self {
        let ArticleRecord {
            article_id,
            author,
            title,
            body,
            topic,
            created_at,
            votes,
            article_img_url,
        } = record;
        Self {
            article_id,
            author,
            title,
            body,
            topic,
            created_at,
            votes,
            article_img_url,
            comment_count: 0,
        }
    }
}

/// List view: everything the detail view has except the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArticleSummary {
    /// Generated primary key.
    pub article_id: i32,
    /// Username of the author.
    pub author: String,
    /// Headline.
    pub title: String,
    /// Topic slug.
    pub topic: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Vote tally.
    pub votes: i32,
    /// Cover image URL.
    pub article_img_url: String,
    /// Number of comments referencing this article.
    pub comment_count: i64,
}

/// Payload for creating an article; `article_img_url` is already defaulted
/// by the validation layer when the request omitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    /// Author username; must reference an existing user.
    pub author: String,
    /// Headline.
    pub title: String,
    /// Full article text.
    pub body: String,
    /// Topic slug; must reference an existing topic.
    pub topic: String,
    /// Cover image URL.
    pub article_img_url: String,
}

/// Sentinel meaning "no filter on this dimension".
pub const FILTER_ALL: &str = "all";

/// Filters applied to the article list. Values are substituted into the
/// query only as bound parameters, never as SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilters {
    /// Topic slug, or [`FILTER_ALL`].
    pub topic: String,
    /// Author username, or [`FILTER_ALL`].
    pub author: String,
}

impl Default for ArticleFilters {
    fn default() -> Self {
        Self {
            topic: FILTER_ALL.to_owned(),
            author: FILTER_ALL.to_owned(),
        }
    }
}

impl ArticleFilters {
    /// The topic slug when a real topic filter is set.
    pub fn topic_filter(&self) -> Option<&str> {
        (self.topic != FILTER_ALL).then_some(self.topic.as_str())
    }

    /// The author username when a real author filter is set.
    pub fn author_filter(&self) -> Option<&str> {
        (self.author != FILTER_ALL).then_some(self.author.as_str())
    }
}

/// Closed set of columns the article list may be sorted by.
///
/// Dynamic sort identifiers reach query text only through
/// [`SortColumn::as_sql`], so arbitrary client input can never be
/// interpolated into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Primary key.
    ArticleId,
    /// Headline.
    Title,
    /// Topic slug.
    Topic,
    /// Author username.
    Author,
    /// Creation timestamp (the default).
    CreatedAt,
    /// Vote tally.
    Votes,
    /// Cover image URL.
    ArticleImgUrl,
    /// Derived comment count.
    CommentCount,
}

impl SortColumn {
    /// Parse a `sort_by` query value against the whitelist.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "article_id" => Some(Self::ArticleId),
            "title" => Some(Self::Title),
            "topic" => Some(Self::Topic),
            "author" => Some(Self::Author),
            "created_at" => Some(Self::CreatedAt),
            "votes" => Some(Self::Votes),
            "article_img_url" => Some(Self::ArticleImgUrl),
            "comment_count" => Some(Self::CommentCount),
            _ => None,
        }
    }

    /// SQL identifier for this column. Static by construction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::ArticleId => "articles.article_id",
            Self::Title => "articles.title",
            Self::Topic => "articles.topic",
            Self::Author => "articles.author",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::ArticleImgUrl => "articles.article_img_url",
            Self::CommentCount => "comment_count",
        }
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (the default).
    Desc,
}

impl SortOrder {
    /// Parse an `order` query value, case-insensitively.
    pub fn from_param(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated sort specification for the article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleSort {
    /// Column to sort on.
    pub column: SortColumn,
    /// Direction.
    pub order: SortOrder,
}

impl Default for ArticleSort {
    fn default() -> Self {
        Self {
            column: SortColumn::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("article_id", SortColumn::ArticleId)]
    #[case("created_at", SortColumn::CreatedAt)]
    #[case("comment_count", SortColumn::CommentCount)]
    #[case("votes", SortColumn::Votes)]
    fn whitelisted_sort_columns_parse(#[case] raw: &str, #[case] expected: SortColumn) {
        assert_eq!(SortColumn::from_param(raw), Some(expected));
    }

    #[rstest]
    #[case("body")]
    #[case("created_at; DROP TABLE articles;")]
    #[case("CREATED_AT")]
    #[case("")]
    fn arbitrary_identifiers_are_rejected(#[case] raw: &str) {
        assert_eq!(SortColumn::from_param(raw), None);
    }

    #[rstest]
    #[case("asc", SortOrder::Asc)]
    #[case("ASC", SortOrder::Asc)]
    #[case("Desc", SortOrder::Desc)]
    fn order_parses_case_insensitively(#[case] raw: &str, #[case] expected: SortOrder) {
        assert_eq!(SortOrder::from_param(raw), Some(expected));
    }

    #[rstest]
    fn order_rejects_anything_else() {
        assert_eq!(SortOrder::from_param("sideways"), None);
        assert_eq!(SortOrder::from_param("ASC;"), None);
    }

    #[rstest]
    fn default_sort_is_newest_first() {
        let sort = ArticleSort::default();
        assert_eq!(sort.column, SortColumn::CreatedAt);
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[rstest]
    fn all_sentinel_means_no_filter() {
        let filters = ArticleFilters::default();
        assert_eq!(filters.topic_filter(), None);
        assert_eq!(filters.author_filter(), None);

        let filtered = ArticleFilters {
            topic: "coding".to_owned(),
            author: FILTER_ALL.to_owned(),
        };
        assert_eq!(filtered.topic_filter(), Some("coding"));
        assert_eq!(filtered.author_filter(), None);
    }

    #[rstest]
    fn new_record_view_reports_zero_comments() {
        let record = ArticleRecord {
            article_id: 14,
            author: "butter_bridge".to_owned(),
            title: "Fresh off the press".to_owned(),
            body: "Breaking news.".to_owned(),
            topic: "coding".to_owned(),
            created_at: chrono::Utc::now(),
            votes: 0,
            article_img_url: DEFAULT_ARTICLE_IMG_URL.to_owned(),
        };
        let view = Article::from_new_record(record);
        assert_eq!(view.comment_count, 0);
        assert_eq!(view.article_id, 14);
    }
}
