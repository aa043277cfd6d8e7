//! Account service - profile management for the authenticated user.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DomainEvent, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// Account management operations
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Fetch the account behind a user ID
    async fn get_account(&self, id: Uuid) -> AppResult<User>;

    /// Update the display name
    async fn update_name(&self, id: Uuid, name: String) -> AppResult<User>;

    /// Change the password after verifying the current one
    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()>;

    /// Permanently close the account
    async fn close_account(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`AccountService`]
pub struct AccountManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> AccountManager<R> {
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
impl<R: Repositories> AccountService for AccountManager<R> {
    async fn get_account(&self, id: Uuid) -> AppResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update_name(&self, id: Uuid, name: String) -> AppResult<User> {
        self.repos.users().update_name(id, name).await
    }

    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()> {
        let user = self.get_account(id).await?;

        let stored = Password::from_hash(user.password_hash);
        if !stored.verify(&current_password) {
            return Err(AppError::InvalidCredentials);
        }

        let new_hash = Password::new(&new_password)?.into_string();
        self.repos.users().update_password(id, new_hash).await
    }

    async fn close_account(&self, id: Uuid) -> AppResult<()> {
        self.repos.users().delete(id).await?;

        self.record(DomainEvent::AccountClosed { user_id: id }).await;

        Ok(())
    }
}
