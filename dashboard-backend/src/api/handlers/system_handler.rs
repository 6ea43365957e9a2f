use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{api::AppState, error::AppResult, types::ApiResponse};

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemInfoResponse {
    pub environment: String,
    pub is_test: bool,
    pub is_production: bool,
    pub is_development: bool,
    pub date_format: String,
}

pub async fn health_check_handler() -> &'static str {
    "OK"
}

pub async fn get_system_info(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<SystemInfoResponse>>> {
    let config = &app_state.config;

    Ok(Json(ApiResponse::success(
        "System information retrieved",
        SystemInfoResponse {
            environment: config.environment.clone(),
            is_test: config.is_test(),
            is_production: config.is_production(),
            is_development: config.is_development(),
            date_format: config.date_format.as_str().to_string(),
        },
    )))
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_handler))
        .route("/system/info", get(get_system_info))
        .with_state(app_state)
}
