//! Repository set backing the application services.
//!
//! Centralizes construction of the concrete stores and hands them to
//! services behind one accessor trait, so a service depends on a single
//! injected value instead of ambient globals. The event log is a side
//! channel appended after the primary write, so no cross-repository
//! transaction management is needed here.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    BookmarkRepository, BookmarkStore, EventRepository, EventStore, PersonRepository, PersonStore,
    RatingRepository, RatingStore, SearchRepository, SearchStore, TitleRepository, TitleStore,
    UserRepository, UserStore,
};

/// Accessor trait for all repositories, for dependency injection.
pub trait Repositories: Send + Sync {
    /// Account repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Title repository
    fn titles(&self) -> Arc<dyn TitleRepository>;

    /// Person repository
    fn people(&self) -> Arc<dyn PersonRepository>;

    /// Rating repository
    fn ratings(&self) -> Arc<dyn RatingRepository>;

    /// Bookmark repository
    fn bookmarks(&self) -> Arc<dyn BookmarkRepository>;

    /// Search history repository
    fn searches(&self) -> Arc<dyn SearchRepository>;

    /// Domain event log
    fn events(&self) -> Arc<dyn EventRepository>;
}

/// Concrete repository set over one database connection
pub struct Persistence {
    users: Arc<UserStore>,
    titles: Arc<TitleStore>,
    people: Arc<PersonStore>,
    ratings: Arc<RatingStore>,
    bookmarks: Arc<BookmarkStore>,
    searches: Arc<SearchStore>,
    events: Arc<EventStore>,
}

impl Persistence {
    /// Create all stores over the shared connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            titles: Arc::new(TitleStore::new(db.clone())),
            people: Arc::new(PersonStore::new(db.clone())),
            ratings: Arc::new(RatingStore::new(db.clone())),
            bookmarks: Arc::new(BookmarkStore::new(db.clone())),
            searches: Arc::new(SearchStore::new(db.clone())),
            events: Arc::new(EventStore::new(db)),
        }
    }
}

impl Repositories for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn titles(&self) -> Arc<dyn TitleRepository> {
        self.titles.clone()
    }

    fn people(&self) -> Arc<dyn PersonRepository> {
        self.people.clone()
    }

    fn ratings(&self) -> Arc<dyn RatingRepository> {
        self.ratings.clone()
    }

    fn bookmarks(&self) -> Arc<dyn BookmarkRepository> {
        self.bookmarks.clone()
    }

    fn searches(&self) -> Arc<dyn SearchRepository> {
        self.searches.clone()
    }

    fn events(&self) -> Arc<dyn EventRepository> {
        self.events.clone()
    }
}
