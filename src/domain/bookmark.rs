//! Bookmark domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// What a bookmark points at.
///
/// Stored as a plain string column; the enum is the single canonical
/// representation in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkTarget {
    Title,
    Person,
}

impl BookmarkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkTarget::Title => "title",
            BookmarkTarget::Person => "person",
        }
    }
}

impl std::str::FromStr for BookmarkTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(BookmarkTarget::Title),
            "person" => Ok(BookmarkTarget::Person),
            other => Err(format!("unknown bookmark target: {}", other)),
        }
    }
}

impl std::fmt::Display for BookmarkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bookmark domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target: BookmarkTarget,
    pub target_id: Uuid,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Bookmark as returned to the owning user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub target: BookmarkTarget,
    pub target_id: Uuid,
    /// Display name of the bookmarked title or person
    pub target_name: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
