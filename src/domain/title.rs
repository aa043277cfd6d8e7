//! Title (movie) domain entity and catalog response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Title domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub plot: Option<String>,
    pub runtime_minutes: Option<i32>,
    /// Genre names, stored as a JSON array alongside the title
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact title representation for list endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TitleSummary {
    pub id: Uuid,
    #[schema(example = "Blade Runner")]
    pub name: String,
    #[schema(example = 1982)]
    pub year: i32,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
}

impl From<Title> for TitleSummary {
    fn from(title: Title) -> Self {
        Self {
            id: title.id,
            name: title.name,
            year: title.year,
            genres: title.genres,
            poster_url: title.poster_url,
        }
    }
}

/// Full title detail, including aggregated rating figures
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TitleDetail {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub plot: Option<String>,
    pub runtime_minutes: Option<i32>,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    /// Mean of all user scores, absent while the title is unrated
    #[schema(example = 8.4)]
    pub average_rating: Option<f64>,
    pub rating_count: u64,
    pub created_at: DateTime<Utc>,
}

impl TitleDetail {
    pub fn from_title(title: Title, average_rating: Option<f64>, rating_count: u64) -> Self {
        Self {
            id: title.id,
            name: title.name,
            year: title.year,
            plot: title.plot,
            runtime_minutes: title.runtime_minutes,
            genres: title.genres,
            poster_url: title.poster_url,
            average_rating,
            rating_count,
            created_at: title.created_at,
        }
    }
}
