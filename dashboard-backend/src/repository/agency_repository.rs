// src/repository/agency_repository.rs

use crate::domain::agency_model::{self, ActiveModel as AgencyActiveModel, Entity as AgencyEntity};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, Set};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AgencyRepository {
    db: DbConn,
}

impl AgencyRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<agency_model::Model>, DbErr> {
        AgencyEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(&self, create_agency: CreateAgency) -> Result<agency_model::Model, DbErr> {
        let now = Utc::now();
        let new_agency = AgencyActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(create_agency.name),
            connect_account_id: Set(create_agency.connect_account_id),
            goal: Set(create_agency.goal),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_agency.insert(&self.db).await
    }
}

/// エージェンシー作成用構造体
#[derive(Debug, Clone)]
pub struct CreateAgency {
    pub name: String,
    pub connect_account_id: Option<String>,
    pub goal: i32,
}
