//! Bookmark repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::bookmark::{self, Entity as BookmarkEntity};
use crate::domain::{Bookmark, BookmarkTarget};
use crate::errors::{AppError, AppResult};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Bookmark persistence operations
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// A user's bookmark of one target, if any
    async fn find_by_user_and_target(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
    ) -> AppResult<Option<Bookmark>>;

    /// Store a new bookmark
    async fn insert(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
        note: Option<String>,
    ) -> AppResult<Bookmark>;

    /// Remove a user's bookmark by its ID, returning the removed bookmark
    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<Bookmark>;

    /// One page of a user's bookmarks, newest first, optionally
    /// filtered by target kind
    async fn list_for_user(
        &self,
        user_id: Uuid,
        kind: Option<BookmarkTarget>,
        page: PageRequest,
    ) -> AppResult<(Vec<Bookmark>, u64)>;
}

/// SeaORM-backed implementation of [`BookmarkRepository`]
pub struct BookmarkStore {
    db: DatabaseConnection,
}

impl BookmarkStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkRepository for BookmarkStore {
    async fn find_by_user_and_target(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
    ) -> AppResult<Option<Bookmark>> {
        let result = BookmarkEntity::find()
            .filter(bookmark::Column::UserId.eq(user_id))
            .filter(bookmark::Column::Target.eq(target.as_str()))
            .filter(bookmark::Column::TargetId.eq(target_id))
            .one(&self.db)
            .await?;

        result.map(Bookmark::try_from).transpose()
    }

    async fn insert(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
        note: Option<String>,
    ) -> AppResult<Bookmark> {
        let active_model = bookmark::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            target: Set(target.as_str().to_string()),
            target_id: Set(target_id),
            note: Set(note),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Bookmark::try_from(model)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<Bookmark> {
        let model = BookmarkEntity::find_by_id(id)
            .filter(bookmark::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let bookmark = Bookmark::try_from(model.clone())?;
        BookmarkEntity::delete_by_id(model.id).exec(&self.db).await?;

        Ok(bookmark)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        kind: Option<BookmarkTarget>,
        page: PageRequest,
    ) -> AppResult<(Vec<Bookmark>, u64)> {
        let mut query = BookmarkEntity::find().filter(bookmark::Column::UserId.eq(user_id));

        if let Some(kind) = kind {
            query = query.filter(bookmark::Column::Target.eq(kind.as_str()));
        }

        let paginator = query
            .order_by_desc(bookmark::Column::CreatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page() - 1).await?;

        let bookmarks = models
            .into_iter()
            .map(Bookmark::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok((bookmarks, total))
    }
}
