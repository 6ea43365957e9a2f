// src/domain/subaccount_model.rs

use crate::domain::billing_link::BillingLink;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subaccounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub agency_id: Uuid,

    pub name: String,

    #[sea_orm(nullable)]
    pub connect_account_id: Option<String>,

    pub goal: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agency_model::Entity",
        from = "Column::AgencyId",
        to = "super::agency_model::Column::Id"
    )]
    Agency,
    #[sea_orm(has_many = "super::funnel_model::Entity")]
    Funnels,
}

impl Related<super::agency_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agency.def()
    }
}

impl Related<super::funnel_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funnels.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn billing_link(&self) -> BillingLink {
        BillingLink::from_connect_account_id(self.connect_account_id.as_deref())
    }
}
