//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel
//! uses them for compile-time query validation and type-safe SQL
//! generation. Regenerate or update by hand when migrations change.

diesel::table! {
    /// Discussion topics.
    ///
    /// The slug is the primary key; articles reference it.
    topics (slug) {
        /// Unique, URL-safe identifier.
        slug -> Varchar,
        /// Human-readable description.
        description -> Varchar,
    }
}

diesel::table! {
    /// Registered users.
    ///
    /// The username is the primary key; articles and comments reference it.
    users (username) {
        /// Unique login name.
        username -> Varchar,
        /// Display name.
        name -> Varchar,
        /// Profile image URL.
        avatar_url -> Varchar,
    }
}

diesel::table! {
    /// News articles.
    articles (article_id) {
        /// Generated primary key.
        article_id -> Int4,
        /// Author username, references `users`.
        author -> Varchar,
        /// Headline.
        title -> Varchar,
        /// Full article text.
        body -> Text,
        /// Topic slug, references `topics`.
        topic -> Varchar,
        /// Creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
        /// Vote tally, defaulted to zero.
        votes -> Int4,
        /// Cover image URL, defaulted to the fixed placeholder.
        article_img_url -> Varchar,
    }
}

diesel::table! {
    /// Comments on articles. Rows are removed by the `ON DELETE CASCADE`
    /// clause when their article goes.
    comments (comment_id) {
        /// Generated primary key.
        comment_id -> Int4,
        /// Comment text.
        body -> Text,
        /// Owning article, references `articles` with cascade delete.
        article_id -> Int4,
        /// Author username, references `users`.
        author -> Varchar,
        /// Vote tally, defaulted to zero.
        votes -> Int4,
        /// Creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(articles -> topics (topic));
diesel::joinable!(articles -> users (author));
diesel::joinable!(comments -> articles (article_id));
diesel::joinable!(comments -> users (author));

diesel::allow_tables_to_appear_in_same_query!(articles, comments, topics, users);
