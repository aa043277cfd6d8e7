//! Rating domain entity.
//!
//! One row per (user, title); re-rating a title revises the existing row,
//! so a user's rating history is simply their ratings ordered by update
//! time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Rating domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title_id: Uuid,
    /// Score on the 1..=10 scale
    pub score: i16,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rating as shown on a title's rating list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RatingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title_id: Uuid,
    #[schema(example = 8)]
    pub score: i16,
    pub review: Option<String>,
    pub rated_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            user_id: rating.user_id,
            title_id: rating.title_id,
            score: rating.score,
            review: rating.review,
            rated_at: rating.updated_at,
        }
    }
}
