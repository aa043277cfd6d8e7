//! Service container - centralized service construction and access.

use std::sync::Arc;

use super::{
    AccountManager, AccountService, AuthService, Authenticator, BookmarkManager, BookmarkService,
    CatalogManager, CatalogService, HistoryManager, HistoryService, RatingManager, RatingService,
};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Account service
    fn accounts(&self) -> Arc<dyn AccountService>;

    /// Catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Rating service
    fn ratings(&self) -> Arc<dyn RatingService>;

    /// Bookmark service
    fn bookmarks(&self) -> Arc<dyn BookmarkService>;

    /// Search history service
    fn history(&self) -> Arc<dyn HistoryService>;
}

/// Concrete implementation of [`ServiceContainer`]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    account_service: Arc<dyn AccountService>,
    catalog_service: Arc<dyn CatalogService>,
    rating_service: Arc<dyn RatingService>,
    bookmark_service: Arc<dyn BookmarkService>,
    history_service: Arc<dyn HistoryService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let repos = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(repos.clone(), config)),
            account_service: Arc::new(AccountManager::new(repos.clone())),
            catalog_service: Arc::new(CatalogManager::new(repos.clone())),
            rating_service: Arc::new(RatingManager::new(repos.clone())),
            bookmark_service: Arc::new(BookmarkManager::new(repos.clone())),
            history_service: Arc::new(HistoryManager::new(repos)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn ratings(&self) -> Arc<dyn RatingService> {
        self.rating_service.clone()
    }

    fn bookmarks(&self) -> Arc<dyn BookmarkService> {
        self.bookmark_service.clone()
    }

    fn history(&self) -> Arc<dyn HistoryService> {
        self.history_service.clone()
    }
}
