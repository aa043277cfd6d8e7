//! Application state - Dependency injection container.
//!
//! All handlers receive their collaborators through this explicit state
//! value via axum's `State` extractor; there are no ambient globals.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Cache, Database};
use crate::services::{
    AccountService, AuthService, BookmarkService, CatalogService, HistoryService, RatingService,
    ServiceContainer, Services,
};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Account service
    pub account_service: Arc<dyn AccountService>,
    /// Catalog service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Rating service
    pub rating_service: Arc<dyn RatingService>,
    /// Bookmark service
    pub bookmark_service: Arc<dyn BookmarkService>,
    /// Search history service
    pub history_service: Arc<dyn HistoryService>,
    /// Redis cache
    pub cache: Arc<Cache>,
    /// Database connection
    pub database: Arc<Database>,
    /// Application configuration (link base, JWT settings)
    pub config: Config,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, cache: Arc<Cache>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config.clone());

        Self {
            auth_service: container.auth(),
            account_service: container.accounts(),
            catalog_service: container.catalog(),
            rating_service: container.ratings(),
            bookmark_service: container.bookmarks(),
            history_service: container.history(),
            cache,
            database,
            config,
        }
    }

    /// Create application state with manually injected services (tests).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        account_service: Arc<dyn AccountService>,
        catalog_service: Arc<dyn CatalogService>,
        rating_service: Arc<dyn RatingService>,
        bookmark_service: Arc<dyn BookmarkService>,
        history_service: Arc<dyn HistoryService>,
        cache: Arc<Cache>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            auth_service,
            account_service,
            catalog_service,
            rating_service,
            bookmark_service,
            history_service,
            cache,
            database,
            config,
        }
    }
}
