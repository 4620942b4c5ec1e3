//! Deterministic in-memory implementation of every storage port.
//!
//! Serves two roles, mirroring the seeded development dataset:
//! handler tests run against it without a database, and the server falls
//! back to it when no database pool is configured.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::articles::{
    Article, ArticleFilters, ArticleRecord, ArticleSort, ArticleSummary, NewArticle, SortColumn,
    SortOrder, DEFAULT_ARTICLE_IMG_URL,
};
use super::comments::{ArticleComment, Comment, NewComment};
use super::ports::{
    ArticlesRepository, CommentsRepository, RepositoryError, TopicsRepository, UsersRepository,
};
use super::topics::{NewTopic, Topic};
use super::users::User;

#[derive(Debug, Default)]
struct FixtureData {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<ArticleRecord>,
    comments: Vec<Comment>,
    next_article_id: i32,
    next_comment_id: i32,
}

/// In-memory news store backed by a mutex, usable behind every port trait.
#[derive(Debug, Default)]
pub struct FixtureNewsStore {
    inner: Mutex<FixtureData>,
}

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn topic(slug: &str, description: &str) -> Topic {
    Topic {
        slug: slug.to_owned(),
        description: description.to_owned(),
    }
}

fn user(username: &str, name: &str, avatar_url: &str) -> User {
    User {
        username: username.to_owned(),
        name: name.to_owned(),
        avatar_url: avatar_url.to_owned(),
    }
}

fn article(
    article_id: i32,
    author: &str,
    title: &str,
    body: &str,
    topic: &str,
    created_at: &str,
    votes: i32,
) -> ArticleRecord {
    ArticleRecord {
        article_id,
        author: author.to_owned(),
        title: title.to_owned(),
        body: body.to_owned(),
        topic: topic.to_owned(),
        created_at: ts(created_at),
        votes,
        article_img_url: DEFAULT_ARTICLE_IMG_URL.to_owned(),
    }
}

fn comment(
    comment_id: i32,
    article_id: i32,
    author: &str,
    body: &str,
    created_at: &str,
    votes: i32,
) -> Comment {
    Comment {
        comment_id,
        body: body.to_owned(),
        article_id,
        author: author.to_owned(),
        votes,
        created_at: ts(created_at),
    }
}

impl FixtureNewsStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store loaded with the development dataset: three topics (one with
    /// no articles), four users, five articles, and thirteen comments —
    /// eleven of them on article 1 so pagination windows are exercised.
    pub fn seeded() -> Self {
        let data = FixtureData {
            topics: vec![
                topic("mitch", "The man, the Mitch, the legend"),
                topic("cats", "Not dogs"),
                topic("paper", "what books are made of"),
            ],
            users: vec![
                user(
                    "butter_bridge",
                    "jonny",
                    "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
                ),
                user(
                    "icellusedkars",
                    "sam",
                    "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
                ),
                user(
                    "rogersop",
                    "paul",
                    "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
                ),
                user(
                    "lurker",
                    "do_nothing",
                    "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
                ),
            ],
            articles: vec![
                article(
                    1,
                    "butter_bridge",
                    "Living in the shadow of a great man",
                    "I find this existence challenging",
                    "mitch",
                    "2020-07-09T20:11:00Z",
                    100,
                ),
                article(
                    2,
                    "icellusedkars",
                    "Sony Vaio; or, The Laptop",
                    "Call me Mitchell.",
                    "mitch",
                    "2020-10-16T05:03:00Z",
                    0,
                ),
                article(
                    3,
                    "icellusedkars",
                    "Eight pug gifs that remind me of mitch",
                    "some gifs",
                    "mitch",
                    "2020-11-03T09:12:00Z",
                    0,
                ),
                article(
                    4,
                    "rogersop",
                    "UNCOVERED: catspiracy to bring down democracy",
                    "Bastet walks amongst us",
                    "cats",
                    "2020-08-03T13:14:00Z",
                    0,
                ),
                article(
                    5,
                    "butter_bridge",
                    "Moustache",
                    "Have you seen the size of that thing?",
                    "mitch",
                    "2020-10-11T11:24:00Z",
                    0,
                ),
            ],
            comments: vec![
                comment(
                    1,
                    1,
                    "butter_bridge",
                    "Oh, I've got compassion running through my veins! I am the moral compass of this website!",
                    "2020-04-06T12:17:00Z",
                    16,
                ),
                comment(2, 1, "icellusedkars", "The beautiful thing about treasure is that it exists.", "2020-01-01T03:08:00Z", 14),
                comment(3, 1, "icellusedkars", "Replacing the quiet elegance of the dark suit.", "2020-02-23T12:01:00Z", 100),
                comment(4, 1, "rogersop", "I carry a log — yes. Is it funny to you?", "2020-03-03T21:13:00Z", -100),
                comment(5, 1, "icellusedkars", "I hate streaming noses", "2020-11-03T21:00:00Z", 0),
                comment(6, 1, "rogersop", "I hate streaming eyes even more", "2020-04-11T21:02:00Z", 0),
                comment(7, 1, "lurker", "Lobster pot", "2020-05-15T20:19:00Z", 0),
                comment(8, 1, "icellusedkars", "Delicious crackerbreads", "2020-04-14T20:19:00Z", 0),
                comment(9, 1, "butter_bridge", "Superficially charming", "2020-01-01T03:09:00Z", 0),
                comment(10, 1, "rogersop", "git push origin master", "2020-06-20T07:24:00Z", 0),
                comment(11, 1, "lurker", "Ambidextrous marsupial", "2020-09-19T23:10:00Z", 0),
                comment(12, 4, "icellusedkars", "What do you see? I have no idea where this will lead us.", "2020-06-09T05:00:00Z", 4),
                comment(13, 4, "butter_bridge", "This morning, I showered for nine minutes.", "2020-07-21T00:20:00Z", -1),
            ],
            next_article_id: 6,
            next_comment_id: 14,
        };
        Self {
            inner: Mutex::new(data),
        }
    }

    /// Number of stored comment rows referencing an article. Inspection
    /// helper for cascade assertions in tests and seeding checks.
    pub fn comment_rows(&self, article_id: i32) -> usize {
        self.lock()
            .comments
            .iter()
            .filter(|row| row.article_id == article_id)
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FixtureData> {
        // A poisoned lock means a panic elsewhere; propagate the data as-is.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn compare_summaries(a: &ArticleSummary, b: &ArticleSummary, sort: ArticleSort) -> Ordering {
    let primary = match sort.column {
        SortColumn::ArticleId => a.article_id.cmp(&b.article_id),
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Topic => a.topic.cmp(&b.topic),
        SortColumn::Author => a.author.cmp(&b.author),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::ArticleImgUrl => a.article_img_url.cmp(&b.article_img_url),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
    };
    let directed = match sort.order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    // Stable windows under equal sort keys: newest id first.
    directed.then(b.article_id.cmp(&a.article_id))
}

fn summarise(record: &ArticleRecord, comment_count: i64) -> ArticleSummary {
    ArticleSummary {
        article_id: record.article_id,
        author: record.author.clone(),
        title: record.title.clone(),
        topic: record.topic.clone(),
        created_at: record.created_at,
        votes: record.votes,
        article_img_url: record.article_img_url.clone(),
        comment_count,
    }
}

fn count_comments(data: &FixtureData, article_id: i32) -> i64 {
    let count = data
        .comments
        .iter()
        .filter(|row| row.article_id == article_id)
        .count();
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[async_trait]
impl TopicsRepository for FixtureNewsStore {
    async fn list(&self) -> Result<Vec<Topic>, RepositoryError> {
        Ok(self.lock().topics.clone())
    }

    async fn create(&self, new_topic: NewTopic) -> Result<Topic, RepositoryError> {
        let mut data = self.lock();
        if data.topics.iter().any(|row| row.slug == new_topic.slug) {
            return Err(RepositoryError::bad_input(format!(
                "duplicate key value violates unique constraint on slug {}",
                new_topic.slug
            )));
        }
        let row = Topic {
            slug: new_topic.slug,
            description: new_topic.description,
        };
        data.topics.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl ArticlesRepository for FixtureNewsStore {
    async fn list(
        &self,
        filters: &ArticleFilters,
        sort: ArticleSort,
    ) -> Result<Vec<ArticleSummary>, RepositoryError> {
        let data = self.lock();
        if let Some(slug) = filters.topic_filter() {
            if !data.topics.iter().any(|row| row.slug == slug) {
                return Err(RepositoryError::unknown_topic(slug));
            }
        }

        let mut summaries: Vec<ArticleSummary> = data
            .articles
            .iter()
            .filter(|row| {
                filters
                    .topic_filter()
                    .is_none_or(|slug| row.topic == slug)
                    && filters
                        .author_filter()
                        .is_none_or(|author| row.author == author)
            })
            .map(|row| summarise(row, count_comments(&data, row.article_id)))
            .collect();
        summaries.sort_by(|a, b| compare_summaries(a, b, sort));
        Ok(summaries)
    }

    async fn find(&self, article_id: i32) -> Result<Option<Article>, RepositoryError> {
        let data = self.lock();
        Ok(data
            .articles
            .iter()
            .find(|row| row.article_id == article_id)
            .map(|row| Article {
                article_id: row.article_id,
                author: row.author.clone(),
                title: row.title.clone(),
                body: row.body.clone(),
                topic: row.topic.clone(),
                created_at: row.created_at,
                votes: row.votes,
                article_img_url: row.article_img_url.clone(),
                comment_count: count_comments(&data, row.article_id),
            }))
    }

    async fn create(&self, new_article: NewArticle) -> Result<ArticleRecord, RepositoryError> {
        let mut data = self.lock();
        if !data.topics.iter().any(|row| row.slug == new_article.topic) {
            return Err(RepositoryError::bad_input(format!(
                "insert violates foreign key: topic {} does not exist",
                new_article.topic
            )));
        }
        if !data
            .users
            .iter()
            .any(|row| row.username == new_article.author)
        {
            return Err(RepositoryError::bad_input(format!(
                "insert violates foreign key: user {} does not exist",
                new_article.author
            )));
        }
        let row = ArticleRecord {
            article_id: data.next_article_id,
            author: new_article.author,
            title: new_article.title,
            body: new_article.body,
            topic: new_article.topic,
            created_at: Utc::now(),
            votes: 0,
            article_img_url: new_article.article_img_url,
        };
        data.next_article_id += 1;
        data.articles.push(row.clone());
        Ok(row)
    }

    async fn adjust_votes(
        &self,
        article_id: i32,
        delta: i32,
    ) -> Result<Option<ArticleRecord>, RepositoryError> {
        let mut data = self.lock();
        Ok(data
            .articles
            .iter_mut()
            .find(|row| row.article_id == article_id)
            .map(|row| {
                row.votes += delta;
                row.clone()
            }))
    }

    async fn delete(&self, article_id: i32) -> Result<bool, RepositoryError> {
        let mut data = self.lock();
        let before = data.articles.len();
        data.articles.retain(|row| row.article_id != article_id);
        let removed = data.articles.len() != before;
        if removed {
            // The storage layer cascades; the fixture mirrors it.
            data.comments.retain(|row| row.article_id != article_id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl CommentsRepository for FixtureNewsStore {
    async fn list_for_article(
        &self,
        article_id: i32,
    ) -> Result<Vec<ArticleComment>, RepositoryError> {
        let data = self.lock();
        if !data.articles.iter().any(|row| row.article_id == article_id) {
            return Err(RepositoryError::UnknownArticle);
        }
        let mut rows: Vec<&Comment> = data
            .comments
            .iter()
            .filter(|row| row.article_id == article_id)
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.comment_id.cmp(&a.comment_id))
        });
        Ok(rows
            .into_iter()
            .map(|row| ArticleComment {
                comment_id: row.comment_id,
                body: row.body.clone(),
                article_id: row.article_id,
                author: row.author.clone(),
                votes: row.votes,
                created_at: row.created_at,
                avatar_url: data
                    .users
                    .iter()
                    .find(|candidate| candidate.username == row.author)
                    .map(|candidate| candidate.avatar_url.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }

    async fn create(
        &self,
        article_id: i32,
        new_comment: NewComment,
    ) -> Result<Comment, RepositoryError> {
        let mut data = self.lock();
        if !data.articles.iter().any(|row| row.article_id == article_id) {
            return Err(RepositoryError::bad_input(format!(
                "insert violates foreign key: article {article_id} does not exist"
            )));
        }
        if !data
            .users
            .iter()
            .any(|row| row.username == new_comment.author)
        {
            return Err(RepositoryError::bad_input(format!(
                "insert violates foreign key: user {} does not exist",
                new_comment.author
            )));
        }
        let row = Comment {
            comment_id: data.next_comment_id,
            body: new_comment.body,
            article_id,
            author: new_comment.author,
            votes: 0,
            created_at: Utc::now(),
        };
        data.next_comment_id += 1;
        data.comments.push(row.clone());
        Ok(row)
    }

    async fn adjust_votes(
        &self,
        comment_id: i32,
        delta: i32,
    ) -> Result<Option<Comment>, RepositoryError> {
        let mut data = self.lock();
        Ok(data
            .comments
            .iter_mut()
            .find(|row| row.comment_id == comment_id)
            .map(|row| {
                row.votes += delta;
                row.clone()
            }))
    }

    async fn delete(&self, comment_id: i32) -> Result<bool, RepositoryError> {
        let mut data = self.lock();
        let before = data.comments.len();
        data.comments.retain(|row| row.comment_id != comment_id);
        Ok(data.comments.len() != before)
    }
}

#[async_trait]
impl UsersRepository for FixtureNewsStore {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.lock().users.clone())
    }

    async fn find(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|row| row.username == username)
            .cloned())
    }
}
