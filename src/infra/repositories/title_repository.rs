//! Title catalog repository.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::entities::{
    credit::{self, Entity as CreditEntity},
    person,
    title::{self, Entity as TitleEntity},
};
use crate::domain::{CastMember, Title};
use crate::errors::AppResult;
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Title persistence operations
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TitleRepository: Send + Sync {
    /// Find title by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Title>>;

    /// One page of titles, optionally filtered by a name search and
    /// release year, with the total match count
    async fn list(
        &self,
        search: Option<String>,
        year: Option<i32>,
        page: PageRequest,
    ) -> AppResult<(Vec<Title>, u64)>;

    /// One page of a title's cast, with the total credit count
    async fn cast(&self, title_id: Uuid, page: PageRequest) -> AppResult<(Vec<CastMember>, u64)>;

    /// Whether a title with this ID exists
    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// Display names for the given title IDs
    async fn names_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<(Uuid, String)>>;
}

/// SeaORM-backed implementation of [`TitleRepository`]
pub struct TitleStore {
    db: DatabaseConnection,
}

impl TitleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TitleRepository for TitleStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Title>> {
        let result = TitleEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Title::from))
    }

    async fn list(
        &self,
        search: Option<String>,
        year: Option<i32>,
        page: PageRequest,
    ) -> AppResult<(Vec<Title>, u64)> {
        let mut query = TitleEntity::find();

        if let Some(search) = search {
            query = query.filter(title::Column::Name.contains(&search));
        }
        if let Some(year) = year {
            query = query.filter(title::Column::Year.eq(year));
        }

        let paginator = query
            .order_by_asc(title::Column::Name)
            .order_by_asc(title::Column::Year)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page() - 1).await?;

        Ok((models.into_iter().map(Title::from).collect(), total))
    }

    async fn cast(&self, title_id: Uuid, page: PageRequest) -> AppResult<(Vec<CastMember>, u64)> {
        let paginator = CreditEntity::find()
            .filter(credit::Column::TitleId.eq(title_id))
            .find_also_related(person::Entity)
            .order_by_asc(credit::Column::CreatedAt)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.page() - 1).await?;

        let members = rows
            .into_iter()
            .filter_map(|(credit, person)| {
                person.map(|person| CastMember {
                    person_id: person.id,
                    name: person.name,
                    character: credit.character,
                })
            })
            .collect();

        Ok((members, total))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let count = TitleEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn names_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<(Uuid, String)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = TitleEntity::find()
            .filter(title::Column::Id.is_in(ids))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| (m.id, m.name)).collect())
    }
}
