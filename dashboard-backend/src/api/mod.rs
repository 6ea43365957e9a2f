// src/api/mod.rs
use crate::config::AppConfig;
use crate::service::dashboard_service::DashboardService;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(dashboard_service: DashboardService, config: AppConfig) -> Self {
        Self {
            dashboard_service: Arc::new(dashboard_service),
            config: Arc::new(config),
        }
    }
}

/// 全ルーターと共通レイヤーを組み立てる
pub fn app_router(app_state: AppState) -> axum::Router {
    use axum::http::{HeaderValue, Method};
    use std::time::Duration;
    use tower_http::cors::{AllowOrigin, CorsLayer};
    use tower_http::timeout::TimeoutLayer;
    use tower_http::trace::TraceLayer;

    let origins: Vec<HeaderValue> = app_state
        .config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let timeout = Duration::from_secs(app_state.config.server.request_timeout_secs);

    axum::Router::new()
        .merge(handlers::system_handler::system_router(app_state.clone()))
        .merge(handlers::dashboard_handler::dashboard_router(app_state))
        // レイヤーは下から順に適用される
        .layer(axum::middleware::from_fn(crate::logging::logging_middleware))
        .layer(axum::middleware::from_fn(crate::logging::inject_request_context))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
