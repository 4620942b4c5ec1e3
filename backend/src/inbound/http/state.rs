//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data`, so they depend only on
//! the domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::fixture::FixtureNewsStore;
use crate::domain::ports::{
    ArticlesRepository, CommentsRepository, TopicsRepository, UsersRepository,
};

/// Dependency bundle for HTTP handlers: one trait object per port.
#[derive(Clone)]
pub struct HttpState {
    /// Topic reads and writes.
    pub topics: Arc<dyn TopicsRepository>,
    /// Article reads and writes.
    pub articles: Arc<dyn ArticlesRepository>,
    /// Comment reads and writes.
    pub comments: Arc<dyn CommentsRepository>,
    /// User reads.
    pub users: Arc<dyn UsersRepository>,
}

impl HttpState {
    /// State backed entirely by one store implementing every port.
    pub fn from_store(store: Arc<FixtureNewsStore>) -> Self {
        Self {
            topics: store.clone(),
            articles: store.clone(),
            comments: store.clone(),
            users: store,
        }
    }

    /// State backed by the seeded in-memory fixture store.
    pub fn seeded_fixture() -> Self {
        Self::from_store(Arc::new(FixtureNewsStore::seeded()))
    }
}
