// tests/common/app_helper.rs

use axum::Router;
use dashboard_backend::{
    api::{app_router, AppState},
    config::AppConfig,
    domain::metrics::SessionDateFormat,
    service::{billing_service::StaticBillingProvider, dashboard_service::DashboardService},
};
use std::sync::Arc;

use crate::common;

/// 指定したプロバイダーでサービスを構築
pub fn build_service(
    db: &common::db::TestDatabase,
    billing: StaticBillingProvider,
) -> DashboardService {
    DashboardService::new(
        db.connection.clone(),
        Arc::new(billing),
        SessionDateFormat::default(),
    )
}

/// テスト用アプリのセットアップ
pub async fn setup_app(billing: StaticBillingProvider) -> (Router, common::db::TestDatabase) {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;

    let service = build_service(&db, billing);
    let app = app_router(AppState::new(service, AppConfig::for_testing()));

    (app, db)
}
