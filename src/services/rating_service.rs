//! Rating service - scoring titles and browsing rating history.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DomainEvent, Rating};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;
use crate::types::PageRequest;

/// Rating operations
#[async_trait]
pub trait RatingService: Send + Sync {
    /// Rate a title, revising any previous rating by the same user
    async fn rate_title(
        &self,
        user_id: Uuid,
        title_id: Uuid,
        score: i16,
        review: Option<String>,
    ) -> AppResult<Rating>;

    /// The caller's rating of one title, if any
    async fn get_own_rating(&self, user_id: Uuid, title_id: Uuid) -> AppResult<Option<Rating>>;

    /// Remove the caller's rating of one title
    async fn delete_rating(&self, user_id: Uuid, title_id: Uuid) -> AppResult<()>;

    /// One page of a title's ratings, newest first
    async fn title_ratings(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)>;

    /// One page of the caller's rating history, most recently revised first
    async fn user_ratings(&self, user_id: Uuid, page: PageRequest)
        -> AppResult<(Vec<Rating>, u64)>;
}

/// Concrete implementation of [`RatingService`]
pub struct RatingManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> RatingManager<R> {
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
impl<R: Repositories> RatingService for RatingManager<R> {
    async fn rate_title(
        &self,
        user_id: Uuid,
        title_id: Uuid,
        score: i16,
        review: Option<String>,
    ) -> AppResult<Rating> {
        // Score bounds are validated by the handler's ValidatedJson extractor
        if !self.repos.titles().exists(title_id).await? {
            return Err(AppError::NotFound);
        }

        let existing = self
            .repos
            .ratings()
            .find_by_user_and_title(user_id, title_id)
            .await?;

        let rating = match existing {
            Some(previous) => {
                let rating = self
                    .repos
                    .ratings()
                    .update(previous.id, score, review)
                    .await?;

                self.record(DomainEvent::RatingRevised {
                    user_id,
                    title_id,
                    score,
                    previous_score: previous.score,
                })
                .await;

                rating
            }
            None => {
                let rating = self
                    .repos
                    .ratings()
                    .insert(user_id, title_id, score, review)
                    .await?;

                self.record(DomainEvent::TitleRated {
                    user_id,
                    title_id,
                    score,
                })
                .await;

                rating
            }
        };

        Ok(rating)
    }

    async fn get_own_rating(&self, user_id: Uuid, title_id: Uuid) -> AppResult<Option<Rating>> {
        self.repos
            .ratings()
            .find_by_user_and_title(user_id, title_id)
            .await
    }

    async fn delete_rating(&self, user_id: Uuid, title_id: Uuid) -> AppResult<()> {
        self.repos
            .ratings()
            .delete_by_user_and_title(user_id, title_id)
            .await?;

        self.record(DomainEvent::RatingRemoved { user_id, title_id })
            .await;

        Ok(())
    }

    async fn title_ratings(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)> {
        if !self.repos.titles().exists(title_id).await? {
            return Err(AppError::NotFound);
        }

        self.repos.ratings().list_for_title(title_id, page).await
    }

    async fn user_ratings(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)> {
        self.repos.ratings().list_for_user(user_id, page).await
    }
}
