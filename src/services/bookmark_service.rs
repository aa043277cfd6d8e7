//! Bookmark service - saving titles and people for later.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Bookmark, BookmarkResponse, BookmarkTarget, DomainEvent};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;
use crate::types::PageRequest;

/// Placeholder shown when a bookmarked target has since been removed
const REMOVED_TARGET_NAME: &str = "(removed)";

/// Bookmark operations
#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// Bookmark a title or person
    async fn add_bookmark(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
        note: Option<String>,
    ) -> AppResult<Bookmark>;

    /// Remove one of the caller's bookmarks
    async fn remove_bookmark(&self, user_id: Uuid, id: Uuid) -> AppResult<()>;

    /// One page of the caller's bookmarks with resolved target names,
    /// optionally filtered by target kind
    async fn list_bookmarks(
        &self,
        user_id: Uuid,
        kind: Option<BookmarkTarget>,
        page: PageRequest,
    ) -> AppResult<(Vec<BookmarkResponse>, u64)>;
}

/// Concrete implementation of [`BookmarkService`]
pub struct BookmarkManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> BookmarkManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }

    async fn record(&self, event: DomainEvent) {
        if let Err(e) = self.repos.events().append(event).await {
            tracing::warn!("Failed to append domain event: {}", e);
        }
    }

    async fn target_exists(&self, target: BookmarkTarget, target_id: Uuid) -> AppResult<bool> {
        match target {
            BookmarkTarget::Title => self.repos.titles().exists(target_id).await,
            BookmarkTarget::Person => self.repos.people().exists(target_id).await,
        }
    }

    /// Resolve display names for one page of bookmarks.
    async fn resolve_names(&self, bookmarks: &[Bookmark]) -> AppResult<HashMap<Uuid, String>> {
        let title_ids: Vec<Uuid> = bookmarks
            .iter()
            .filter(|b| b.target == BookmarkTarget::Title)
            .map(|b| b.target_id)
            .collect();
        let person_ids: Vec<Uuid> = bookmarks
            .iter()
            .filter(|b| b.target == BookmarkTarget::Person)
            .map(|b| b.target_id)
            .collect();

        let mut names = HashMap::new();
        names.extend(self.repos.titles().names_by_ids(title_ids).await?);
        names.extend(self.repos.people().names_by_ids(person_ids).await?);

        Ok(names)
    }
}

#[async_trait]
impl<R: Repositories> BookmarkService for BookmarkManager<R> {
    async fn add_bookmark(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
        note: Option<String>,
    ) -> AppResult<Bookmark> {
        if !self.target_exists(target, target_id).await? {
            return Err(AppError::NotFound);
        }

        let existing = self
            .repos
            .bookmarks()
            .find_by_user_and_target(user_id, target, target_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::conflict("Bookmark"));
        }

        let bookmark = self
            .repos
            .bookmarks()
            .insert(user_id, target, target_id, note)
            .await?;

        self.record(DomainEvent::BookmarkAdded {
            user_id,
            target,
            target_id,
        })
        .await;

        Ok(bookmark)
    }

    async fn remove_bookmark(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        let removed = self.repos.bookmarks().delete(user_id, id).await?;

        self.record(DomainEvent::BookmarkRemoved {
            user_id,
            target: removed.target,
            target_id: removed.target_id,
        })
        .await;

        Ok(())
    }

    async fn list_bookmarks(
        &self,
        user_id: Uuid,
        kind: Option<BookmarkTarget>,
        page: PageRequest,
    ) -> AppResult<(Vec<BookmarkResponse>, u64)> {
        let (bookmarks, total) = self
            .repos
            .bookmarks()
            .list_for_user(user_id, kind, page)
            .await?;

        let names = self.resolve_names(&bookmarks).await?;

        let responses = bookmarks
            .into_iter()
            .map(|b| {
                let target_name = names
                    .get(&b.target_id)
                    .cloned()
                    .unwrap_or_else(|| REMOVED_TARGET_NAME.to_string());

                BookmarkResponse {
                    id: b.id,
                    target: b.target,
                    target_id: b.target_id,
                    target_name,
                    note: b.note,
                    created_at: b.created_at,
                }
            })
            .collect();

        Ok((responses, total))
    }
}
