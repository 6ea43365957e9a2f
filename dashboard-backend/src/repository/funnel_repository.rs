// src/repository/funnel_repository.rs

use crate::domain::funnel_model::{self, ActiveModel as FunnelActiveModel, Entity as FunnelEntity};
use crate::domain::funnel_page_model::{
    self, ActiveModel as FunnelPageActiveModel, Entity as FunnelPageEntity,
};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, Order, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FunnelRepository {
    db: DbConn,
}

impl FunnelRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// サブアカウントのファネルをページ付きで取得
    pub async fn find_with_pages_by_subaccount_id(
        &self,
        subaccount_id: Uuid,
    ) -> Result<Vec<(funnel_model::Model, Vec<funnel_page_model::Model>)>, DbErr> {
        FunnelEntity::find()
            .filter(funnel_model::Column::SubaccountId.eq(subaccount_id))
            .order_by(funnel_model::Column::CreatedAt, Order::Asc)
            .find_with_related(FunnelPageEntity)
            .all(&self.db)
            .await
    }

    pub async fn create_funnel(&self, create_funnel: CreateFunnel) -> Result<funnel_model::Model, DbErr> {
        let now = Utc::now();
        let new_funnel = FunnelActiveModel {
            id: Set(Uuid::new_v4()),
            subaccount_id: Set(create_funnel.subaccount_id),
            name: Set(create_funnel.name),
            published: Set(create_funnel.published),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_funnel.insert(&self.db).await
    }

    pub async fn create_page(
        &self,
        create_page: CreateFunnelPage,
    ) -> Result<funnel_page_model::Model, DbErr> {
        let now = Utc::now();
        let new_page = FunnelPageActiveModel {
            id: Set(Uuid::new_v4()),
            funnel_id: Set(create_page.funnel_id),
            name: Set(create_page.name),
            path_name: Set(create_page.path_name),
            visits: Set(create_page.visits),
            sort_order: Set(create_page.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_page.insert(&self.db).await
    }
}

/// ファネル作成用構造体
#[derive(Debug, Clone)]
pub struct CreateFunnel {
    pub subaccount_id: Uuid,
    pub name: String,
    pub published: bool,
}

/// ファネルページ作成用構造体
#[derive(Debug, Clone)]
pub struct CreateFunnelPage {
    pub funnel_id: Uuid,
    pub name: String,
    pub path_name: String,
    pub visits: i32,
    pub sort_order: i32,
}
