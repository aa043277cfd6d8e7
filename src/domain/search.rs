//! Search history domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One recorded catalog search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub query: String,
    pub searched_at: DateTime<Utc>,
}

/// Search history entry as returned to the owning user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchEntryResponse {
    pub id: Uuid,
    #[schema(example = "blade runner")]
    pub query: String,
    pub searched_at: DateTime<Utc>,
}

impl From<SearchEntry> for SearchEntryResponse {
    fn from(entry: SearchEntry) -> Self {
        Self {
            id: entry.id,
            query: entry.query,
            searched_at: entry.searched_at,
        }
    }
}
