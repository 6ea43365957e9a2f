// src/domain/agency_model.rs

use crate::domain::billing_link::BillingLink;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(nullable)]
    pub connect_account_id: Option<String>,

    /// 管理サブアカウント数の目標
    pub goal: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subaccount_model::Entity")]
    Subaccounts,
}

impl Related<super::subaccount_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subaccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn billing_link(&self) -> BillingLink {
        BillingLink::from_connect_account_id(self.connect_account_id.as_deref())
    }
}
