//! Search history repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::search_entry::{self, Entity as SearchEntity};
use crate::domain::SearchEntry;
use crate::errors::{AppError, AppResult};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Search history persistence operations
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Append one search to a user's history
    async fn insert(&self, user_id: Uuid, query: String) -> AppResult<SearchEntry>;

    /// One page of a user's history, newest first
    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<SearchEntry>, u64)>;

    /// Remove a single history entry owned by the user
    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<()>;

    /// Remove a user's entire history, returning the entry count
    async fn clear_for_user(&self, user_id: Uuid) -> AppResult<u64>;
}

/// SeaORM-backed implementation of [`SearchRepository`]
pub struct SearchStore {
    db: DatabaseConnection,
}

impl SearchStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SearchRepository for SearchStore {
    async fn insert(&self, user_id: Uuid, query: String) -> AppResult<SearchEntry> {
        let active_model = search_entry::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            query: Set(query),
            searched_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(SearchEntry::from(model))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<SearchEntry>, u64)> {
        let paginator = SearchEntity::find()
            .filter(search_entry::Column::UserId.eq(user_id))
            .order_by_desc(search_entry::Column::SearchedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page() - 1).await?;

        Ok((models.into_iter().map(SearchEntry::from).collect(), total))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        let result = SearchEntity::delete_many()
            .filter(search_entry::Column::Id.eq(id))
            .filter(search_entry::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn clear_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = SearchEntity::delete_many()
            .filter(search_entry::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
