//! Domain events.
//!
//! Events are a side channel: entities stay plain value records and the
//! calling service appends the relevant event to the log explicitly after
//! the primary write. The log is observational and carries no workflow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bookmark::BookmarkTarget;

/// Events emitted by the application services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    UserRegistered {
        user_id: Uuid,
        email: String,
    },
    AccountClosed {
        user_id: Uuid,
    },
    TitleRated {
        user_id: Uuid,
        title_id: Uuid,
        score: i16,
    },
    RatingRevised {
        user_id: Uuid,
        title_id: Uuid,
        score: i16,
        previous_score: i16,
    },
    RatingRemoved {
        user_id: Uuid,
        title_id: Uuid,
    },
    BookmarkAdded {
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
    },
    BookmarkRemoved {
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
    },
    SearchRecorded {
        user_id: Uuid,
        query: String,
    },
}

impl DomainEvent {
    /// Stable event name used as the `event_type` column
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::UserRegistered { .. } => "user_registered",
            DomainEvent::AccountClosed { .. } => "account_closed",
            DomainEvent::TitleRated { .. } => "title_rated",
            DomainEvent::RatingRevised { .. } => "rating_revised",
            DomainEvent::RatingRemoved { .. } => "rating_removed",
            DomainEvent::BookmarkAdded { .. } => "bookmark_added",
            DomainEvent::BookmarkRemoved { .. } => "bookmark_removed",
            DomainEvent::SearchRecorded { .. } => "search_recorded",
        }
    }

    /// The user the event concerns
    pub fn user_id(&self) -> Uuid {
        match self {
            DomainEvent::UserRegistered { user_id, .. }
            | DomainEvent::AccountClosed { user_id }
            | DomainEvent::TitleRated { user_id, .. }
            | DomainEvent::RatingRevised { user_id, .. }
            | DomainEvent::RatingRemoved { user_id, .. }
            | DomainEvent::BookmarkAdded { user_id, .. }
            | DomainEvent::BookmarkRemoved { user_id, .. }
            | DomainEvent::SearchRecorded { user_id, .. } => *user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload_is_tagged() {
        let event = DomainEvent::TitleRated {
            user_id: Uuid::new_v4(),
            title_id: Uuid::new_v4(),
            score: 9,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "title_rated");
        assert_eq!(json["score"], 9);
        assert_eq!(event.name(), "title_rated");
    }
}
