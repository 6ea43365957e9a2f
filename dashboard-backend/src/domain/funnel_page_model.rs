// src/domain/funnel_page_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "funnel_pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub funnel_id: Uuid,
    pub name: String,
    pub path_name: String,
    pub visits: i32,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::funnel_model::Entity",
        from = "Column::FunnelId",
        to = "super::funnel_model::Column::Id"
    )]
    Funnel,
}

impl Related<super::funnel_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funnel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
