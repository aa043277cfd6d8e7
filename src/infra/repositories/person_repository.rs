//! Person catalog repository.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::entities::{
    credit::{self, Entity as CreditEntity},
    person::{self, Entity as PersonEntity},
    title,
};
use crate::domain::{FilmographyEntry, Person};
use crate::errors::AppResult;
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Person persistence operations
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Find person by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Person>>;

    /// One page of people, optionally filtered by a name search,
    /// with the total match count
    async fn list(&self, search: Option<String>, page: PageRequest)
        -> AppResult<(Vec<Person>, u64)>;

    /// One page of the titles a person appeared in, newest first
    async fn filmography(
        &self,
        person_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<FilmographyEntry>, u64)>;

    /// Whether a person with this ID exists
    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// Display names for the given person IDs
    async fn names_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<(Uuid, String)>>;
}

/// SeaORM-backed implementation of [`PersonRepository`]
pub struct PersonStore {
    db: DatabaseConnection,
}

impl PersonStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Person>> {
        let result = PersonEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Person::from))
    }

    async fn list(
        &self,
        search: Option<String>,
        page: PageRequest,
    ) -> AppResult<(Vec<Person>, u64)> {
        let mut query = PersonEntity::find();

        if let Some(search) = search {
            query = query.filter(person::Column::Name.contains(&search));
        }

        let paginator = query
            .order_by_asc(person::Column::Name)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page() - 1).await?;

        Ok((models.into_iter().map(Person::from).collect(), total))
    }

    async fn filmography(
        &self,
        person_id: Uuid,
        page: PageRequest,
    ) -> AppResult<(Vec<FilmographyEntry>, u64)> {
        let paginator = CreditEntity::find()
            .filter(credit::Column::PersonId.eq(person_id))
            .find_also_related(title::Entity)
            .order_by_desc(credit::Column::CreatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.page() - 1).await?;

        let entries = rows
            .into_iter()
            .filter_map(|(credit, title)| {
                title.map(|title| FilmographyEntry {
                    title_id: title.id,
                    name: title.name,
                    year: title.year,
                    character: credit.character,
                })
            })
            .collect();

        Ok((entries, total))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let count = PersonEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn names_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<(Uuid, String)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = PersonEntity::find()
            .filter(person::Column::Id.is_in(ids))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| (m.id, m.name)).collect())
    }
}
