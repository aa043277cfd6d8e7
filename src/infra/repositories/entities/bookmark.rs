//! Bookmark entity; unique per (user, target kind, target id).

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookmarks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    /// Target kind as text ("title" or "person")
    pub target: String,
    pub target_id: Uuid,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for crate::domain::Bookmark {
    type Error = crate::errors::AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let target = model
            .target
            .parse()
            .map_err(crate::errors::AppError::internal)?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            target,
            target_id: model.target_id,
            note: model.note,
            created_at: model.created_at,
        })
    }
}
