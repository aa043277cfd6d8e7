//! Title (movie) entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "titles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub plot: Option<String>,
    pub runtime_minutes: Option<i32>,
    /// Genre names as a JSON array of strings
    pub genres: Json,
    pub poster_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::credit::Entity")]
    Credits,
    #[sea_orm(has_many = "super::rating::Entity")]
    Ratings,
}

impl Related<super::credit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Credits.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Title {
    fn from(model: Model) -> Self {
        // Tolerate malformed rows rather than failing the whole page
        let genres = serde_json::from_value(model.genres).unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            year: model.year,
            plot: model.plot,
            runtime_minutes: model.runtime_minutes,
            genres,
            poster_url: model.poster_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
