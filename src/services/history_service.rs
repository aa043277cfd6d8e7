//! Search history service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DomainEvent, SearchEntry};
use crate::errors::AppResult;
use crate::infra::Repositories;
use crate::types::PageRequest;

/// Search history operations
#[async_trait]
pub trait HistoryService: Send + Sync {
    /// Append one search to the caller's history
    async fn record_search(&self, user_id: Uuid, query: String) -> AppResult<SearchEntry>;

    /// One page of the caller's history, newest first
    async fn list_history(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<SearchEntry>, u64)>;

    /// Remove a single history entry
    async fn delete_entry(&self, user_id: Uuid, id: Uuid) -> AppResult<()>;

    /// Remove the caller's entire history, returning the entry count
    async fn clear_history(&self, user_id: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of [`HistoryService`]
pub struct HistoryManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> HistoryManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }

    async fn record(&self, event: DomainEvent) {
        if let Err(e) = self.repos.events().append(event).await {
            tracing::warn!("Failed to append domain event: {}", e);
        }
    }
}

#[async_trait]
impl<R: Repositories> HistoryService for HistoryManager<R> {
    async fn record_search(&self, user_id: Uuid, query: String) -> AppResult<SearchEntry> {
        let entry = self.repos.searches().insert(user_id, query.clone()).await?;

        self.record(DomainEvent::SearchRecorded { user_id, query })
            .await;

        Ok(entry)
    }

    async fn list_history(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<SearchEntry>, u64)> {
        self.repos.searches().list_for_user(user_id, page).await
    }

    async fn delete_entry(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        self.repos.searches().delete(user_id, id).await
    }

    async fn clear_history(&self, user_id: Uuid) -> AppResult<u64> {
        self.repos.searches().clear_for_user(user_id).await
    }
}
