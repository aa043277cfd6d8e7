//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Caching (Redis)
//! - Repository set wiring for the services

pub mod cache;
pub mod db;
pub mod persistence;
pub mod repositories;

pub use cache::Cache;
pub use db::{Database, Migrator};
pub use persistence::{Persistence, Repositories};
pub use repositories::{
    BookmarkRepository, EventRepository, PersonRepository, RatingRepository, RatingStats,
    SearchRepository, TitleRepository, UserRepository,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockBookmarkRepository, MockEventRepository, MockPersonRepository, MockRatingRepository,
    MockSearchRepository, MockTitleRepository, MockUserRepository,
};
