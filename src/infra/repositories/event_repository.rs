//! Domain event log repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use super::entities::event;
use crate::domain::DomainEvent;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Append-only event log
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Append one event to the log
    async fn append(&self, event: DomainEvent) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`EventRepository`]
pub struct EventStore {
    db: DatabaseConnection,
}

impl EventStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventStore {
    async fn append(&self, event: DomainEvent) -> AppResult<()> {
        let payload = serde_json::to_value(&event)
            .map_err(|e| AppError::internal(format!("Event serialization failed: {}", e)))?;

        let active_model = event::ActiveModel {
            id: Set(Uuid::new_v4()),
            event_type: Set(event.name().to_string()),
            user_id: Set(event.user_id()),
            payload: Set(payload),
            occurred_at: Set(Utc::now()),
        };

        active_model.insert(&self.db).await?;
        Ok(())
    }
}
