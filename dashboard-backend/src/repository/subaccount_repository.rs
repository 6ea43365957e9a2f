// src/repository/subaccount_repository.rs

use crate::domain::subaccount_model::{
    self, ActiveModel as SubaccountActiveModel, Entity as SubaccountEntity,
};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SubaccountRepository {
    db: DbConn,
}

impl SubaccountRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<subaccount_model::Model>, DbErr> {
        SubaccountEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn count_by_agency_id(&self, agency_id: Uuid) -> Result<u64, DbErr> {
        SubaccountEntity::find()
            .filter(subaccount_model::Column::AgencyId.eq(agency_id))
            .count(&self.db)
            .await
    }

    pub async fn create(
        &self,
        create_subaccount: CreateSubaccount,
    ) -> Result<subaccount_model::Model, DbErr> {
        let now = Utc::now();
        let new_subaccount = SubaccountActiveModel {
            id: Set(Uuid::new_v4()),
            agency_id: Set(create_subaccount.agency_id),
            name: Set(create_subaccount.name),
            connect_account_id: Set(create_subaccount.connect_account_id),
            goal: Set(create_subaccount.goal),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_subaccount.insert(&self.db).await
    }
}

/// サブアカウント作成用構造体
#[derive(Debug, Clone)]
pub struct CreateSubaccount {
    pub agency_id: Uuid,
    pub name: String,
    pub connect_account_id: Option<String>,
    pub goal: i32,
}
