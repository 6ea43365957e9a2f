// src/main.rs
use dashboard_backend::api::{app_router, AppState};
use dashboard_backend::config::{AppConfig, StripeConfig};
use dashboard_backend::db::create_db_pool;
use dashboard_backend::service::billing_service::billing_provider_from_config;
use dashboard_backend::service::dashboard_service::DashboardService;
use migration::{Migrator, MigratorTrait};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Dashboard Backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;
    let stripe_config =
        StripeConfig::from_env().map_err(|e| format!("Failed to load Stripe configuration: {}", e))?;
    tracing::info!(
        environment = %app_config.environment,
        stripe_test_mode = stripe_config.is_test_mode(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    if std::env::var("RUN_MIGRATIONS").is_ok_and(|v| v == "true") {
        Migrator::up(&db_pool, None).await?;
        tracing::info!("Database migrations applied.");
    }

    let billing = billing_provider_from_config(&stripe_config);
    let dashboard_service =
        DashboardService::new(db_pool, billing, app_config.date_format.clone());

    let server_addr = app_config.server_addr();
    let app = app_router(AppState::new(dashboard_service, app_config));

    // サーバーの起動
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
