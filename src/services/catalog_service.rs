//! Catalog service - title and person browsing.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CastMember, FilmographyEntry, Person, Title, TitleDetail};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;
use crate::types::PageRequest;

/// Read-side catalog operations
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Title detail with aggregated rating figures
    async fn get_title(&self, id: Uuid) -> AppResult<TitleDetail>;

    /// One page of titles with the total match count
    async fn list_titles(
        &self,
        search: Option<String>,
        year: Option<i32>,
        page: PageRequest,
    ) -> AppResult<(Vec<Title>, u64)>;

    /// One page of a title's cast
    async fn title_cast(&self, title_id: Uuid, page: PageRequest)
        -> AppResult<(Vec<CastMember>, u64)>;

    /// Person detail
    async fn get_person(&self, id: Uuid) -> AppResult<Person>;

    /// One page of people with the total match count
    async fn list_people(
        &self,
        search: Option<String>,
        page: PageRequest,
    ) -> AppResult<(Vec<Person>, u64)>;

    /// One page of the titles a person appeared in
    async fn filmography(
        &self,
        person_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<FilmographyEntry>, u64)>;
}

/// Concrete implementation of [`CatalogService`]
pub struct CatalogManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> CatalogManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> CatalogService for CatalogManager<R> {
    async fn get_title(&self, id: Uuid) -> AppResult<TitleDetail> {
        let title = self
            .repos
            .titles()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let stats = self.repos.ratings().stats_for_title(id).await?;

        Ok(TitleDetail::from_title(title, stats.average, stats.count))
    }

    async fn list_titles(
        &self,
        search: Option<String>,
        year: Option<i32>,
        page: PageRequest,
    ) -> AppResult<(Vec<Title>, u64)> {
        self.repos.titles().list(search, year, page).await
    }

    async fn title_cast(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<CastMember>, u64)> {
        if !self.repos.titles().exists(title_id).await? {
            return Err(AppError::NotFound);
        }

        self.repos.titles().cast(title_id, page).await
    }

    async fn get_person(&self, id: Uuid) -> AppResult<Person> {
        self.repos
            .people()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_people(
        &self,
        search: Option<String>,
        page: PageRequest,
    ) -> AppResult<(Vec<Person>, u64)> {
        self.repos.people().list(search, page).await
    }

    async fn filmography(
        &self,
        person_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<FilmographyEntry>, u64)> {
        if !self.repos.people().exists(person_id).await? {
            return Err(AppError::NotFound);
        }

        self.repos.people().filmography(person_id, page).await
    }
}
