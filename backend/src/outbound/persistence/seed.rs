//! Example data seeding.
//!
//! Topics and users are seed-created rather than API-created; this routine
//! inserts the development set when seeding is enabled in the settings.
//! Inserts are idempotent: existing rows are left untouched.

use diesel_async::RunQueryDsl;
use tracing::info;

use crate::domain::ports::RepositoryError;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTopicRow, NewUserRow};
use super::pool::DbPool;
use super::schema::{topics, users};

const SEED_TOPICS: &[NewTopicRow<'static>] = &[
    NewTopicRow {
        slug: "mitch",
        description: "The man, the Mitch, the legend",
    },
    NewTopicRow {
        slug: "cats",
        description: "Not dogs",
    },
    NewTopicRow {
        slug: "paper",
        description: "what books are made of",
    },
];

const SEED_USERS: &[NewUserRow<'static>] = &[
    NewUserRow {
        username: "butter_bridge",
        name: "jonny",
        avatar_url: "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    },
    NewUserRow {
        username: "icellusedkars",
        name: "sam",
        avatar_url: "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    },
    NewUserRow {
        username: "rogersop",
        name: "paul",
        avatar_url: "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    },
    NewUserRow {
        username: "lurker",
        name: "do_nothing",
        avatar_url: "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    },
];

/// Insert the development topics and users, skipping rows that already
/// exist.
pub async fn seed_example_data(pool: &DbPool) -> Result<(), RepositoryError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;

    let inserted_topics = diesel::insert_into(topics::table)
        .values(SEED_TOPICS)
        .on_conflict(topics::slug)
        .do_nothing()
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

    let inserted_users = diesel::insert_into(users::table)
        .values(SEED_USERS)
        .on_conflict(users::username)
        .do_nothing()
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

    info!(inserted_topics, inserted_users, "example data seeded");
    Ok(())
}
