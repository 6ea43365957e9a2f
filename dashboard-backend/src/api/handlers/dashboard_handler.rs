// src/api/handlers/dashboard_handler.rs

use crate::api::dto::dashboard_dto::{AgencyDashboard, DashboardQuery, SubaccountDashboard};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::extractors::ValidatedUuid;
use crate::types::ApiResponse;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::info;
use validator::Validate;

/// クエリを取り出して検証する
fn validated_query(query: Result<Query<DashboardQuery>, QueryRejection>) -> AppResult<DashboardQuery> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    query.validate()?;
    Ok(query)
}

/// エージェンシーダッシュボード取得
pub async fn agency_dashboard_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(agency_id): ValidatedUuid,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse<AgencyDashboard>>> {
    let query = validated_query(query)?;

    info!(agency_id = %agency_id, year = ?query.year, "Getting agency dashboard");

    let dashboard = app_state
        .dashboard_service
        .agency_dashboard(agency_id, query.year)
        .await?;

    Ok(Json(ApiResponse::success(
        "Agency dashboard retrieved successfully",
        dashboard,
    )))
}

/// サブアカウントダッシュボード取得
pub async fn subaccount_dashboard_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(subaccount_id): ValidatedUuid,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse<SubaccountDashboard>>> {
    let query = validated_query(query)?;

    info!(subaccount_id = %subaccount_id, year = ?query.year, "Getting subaccount dashboard");

    let dashboard = app_state
        .dashboard_service
        .subaccount_dashboard(subaccount_id, query.year)
        .await?;

    Ok(Json(ApiResponse::success(
        "Subaccount dashboard retrieved successfully",
        dashboard,
    )))
}

pub fn dashboard_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/agencies/{agency_id}/dashboard",
            get(agency_dashboard_handler),
        )
        .route(
            "/subaccounts/{subaccount_id}/dashboard",
            get(subaccount_dashboard_handler),
        )
        .with_state(app_state)
}
