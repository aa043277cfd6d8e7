//! Rating repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::rating::{self, Entity as RatingEntity};
use crate::domain::Rating;
use crate::errors::{AppError, AppResult};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Aggregated rating figures for one title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingStats {
    pub average: Option<f64>,
    pub count: u64,
}

#[derive(Debug, FromQueryResult)]
struct StatsRow {
    score_sum: Option<i64>,
    rating_count: i64,
}

/// Rating persistence operations
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// A user's rating of one title, if any
    async fn find_by_user_and_title(
        &self,
        user_id: Uuid,
        title_id: Uuid,
    ) -> AppResult<Option<Rating>>;

    /// Record a first-time rating
    async fn insert(
        &self,
        user_id: Uuid,
        title_id: Uuid,
        score: i16,
        review: Option<String>,
    ) -> AppResult<Rating>;

    /// Revise an existing rating in place
    async fn update(&self, id: Uuid, score: i16, review: Option<String>) -> AppResult<Rating>;

    /// Remove a user's rating of one title
    async fn delete_by_user_and_title(&self, user_id: Uuid, title_id: Uuid) -> AppResult<()>;

    /// One page of a title's ratings, newest first
    async fn list_for_title(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)>;

    /// One page of a user's rating history, most recently revised first
    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)>;

    /// Average score and rating count for a title
    async fn stats_for_title(&self, title_id: Uuid) -> AppResult<RatingStats>;
}

/// SeaORM-backed implementation of [`RatingRepository`]
pub struct RatingStore {
    db: DatabaseConnection,
}

impl RatingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingStore {
    async fn find_by_user_and_title(
        &self,
        user_id: Uuid,
        title_id: Uuid,
    ) -> AppResult<Option<Rating>> {
        let result = RatingEntity::find()
            .filter(rating::Column::UserId.eq(user_id))
            .filter(rating::Column::TitleId.eq(title_id))
            .one(&self.db)
            .await?;

        Ok(result.map(Rating::from))
    }

    async fn insert(
        &self,
        user_id: Uuid,
        title_id: Uuid,
        score: i16,
        review: Option<String>,
    ) -> AppResult<Rating> {
        let now = Utc::now();
        let active_model = rating::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            title_id: Set(title_id),
            score: Set(score),
            review: Set(review),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Rating::from(model))
    }

    async fn update(&self, id: Uuid, score: i16, review: Option<String>) -> AppResult<Rating> {
        let model = RatingEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: rating::ActiveModel = model.into();
        active.score = Set(score);
        active.review = Set(review);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Rating::from(model))
    }

    async fn delete_by_user_and_title(&self, user_id: Uuid, title_id: Uuid) -> AppResult<()> {
        let result = RatingEntity::delete_many()
            .filter(rating::Column::UserId.eq(user_id))
            .filter(rating::Column::TitleId.eq(title_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list_for_title(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)> {
        let paginator = RatingEntity::find()
            .filter(rating::Column::TitleId.eq(title_id))
            .order_by_desc(rating::Column::UpdatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page() - 1).await?;

        Ok((models.into_iter().map(Rating::from).collect(), total))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)> {
        let paginator = RatingEntity::find()
            .filter(rating::Column::UserId.eq(user_id))
            .order_by_desc(rating::Column::UpdatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page() - 1).await?;

        Ok((models.into_iter().map(Rating::from).collect(), total))
    }

    async fn stats_for_title(&self, title_id: Uuid) -> AppResult<RatingStats> {
        let row = RatingEntity::find()
            .filter(rating::Column::TitleId.eq(title_id))
            .select_only()
            .column_as(rating::Column::Score.sum(), "score_sum")
            .column_as(rating::Column::Id.count(), "rating_count")
            .into_model::<StatsRow>()
            .one(&self.db)
            .await?;

        let stats = match row {
            Some(row) if row.rating_count > 0 => RatingStats {
                average: row
                    .score_sum
                    .map(|sum| sum as f64 / row.rating_count as f64),
                count: row.rating_count as u64,
            },
            _ => RatingStats {
                average: None,
                count: 0,
            },
        };

        Ok(stats)
    }
}
