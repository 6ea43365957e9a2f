// src/domain/funnel_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "funnels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub subaccount_id: Uuid,
    pub name: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subaccount_model::Entity",
        from = "Column::SubaccountId",
        to = "super::subaccount_model::Column::Id"
    )]
    Subaccount,
    #[sea_orm(has_many = "super::funnel_page_model::Entity")]
    FunnelPages,
}

impl Related<super::subaccount_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subaccount.def()
    }
}

impl Related<super::funnel_page_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FunnelPages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
