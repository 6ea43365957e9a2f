// tests/integration/dashboard_service_tests.rs

use crate::common::{self, app_helper::build_service, test_data};
use dashboard_backend::domain::checkout_session::{CheckoutSession, SessionStatus};
use dashboard_backend::error::AppError;
use dashboard_backend::service::billing_service::StaticBillingProvider;
use uuid::Uuid;

fn linked_provider() -> StaticBillingProvider {
    StaticBillingProvider::new().with_account(
        test_data::TEST_ACCOUNT_ID,
        Some("eur"),
        test_data::sessions_2024(),
    )
}

#[tokio::test]
async fn test_agency_dashboard_with_linked_billing() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let service = build_service(&db, linked_provider());

    let agency =
        test_data::create_agency(&db.connection, Some(test_data::TEST_ACCOUNT_ID), 4).await;
    test_data::create_subaccount(&db.connection, agency.id, None).await;

    let dashboard = service.agency_dashboard(agency.id, Some(2024)).await.unwrap();

    assert_eq!(dashboard.year, 2024);
    assert!(dashboard.billing_linked);
    assert_eq!(dashboard.currency, "EUR");

    // 前年のセッションは期間外
    assert_eq!(dashboard.metrics.total_sessions, 3);
    assert_eq!(dashboard.metrics.net_revenue, 100.0);
    // エージェンシーでは open のみが見込み
    assert_eq!(dashboard.metrics.potential_revenue, 50.0);
    assert_eq!(dashboard.metrics.closing_rate_percent, 33.33);
    assert_eq!(dashboard.metrics.closed_sessions[0].created, "3/15/2024");

    assert_eq!(dashboard.active_clients, 1);
    assert_eq!(dashboard.goal, 4);
    assert_eq!(dashboard.goal_progress_percent, 25.0);

    assert_eq!(dashboard.conversions.won_sessions, 1);
    assert_eq!(dashboard.conversions.abandoned_sessions, 2);

    let history: Vec<_> = dashboard
        .transaction_history
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(history, vec!["cs_complete", "cs_open"]);
}

#[tokio::test]
async fn test_agency_dashboard_unlinked_returns_baseline() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let service = build_service(&db, StaticBillingProvider::unavailable("must not be called"));

    let agency = test_data::create_agency(&db.connection, None, 5).await;

    let dashboard = service.agency_dashboard(agency.id, Some(2024)).await.unwrap();

    assert!(!dashboard.billing_linked);
    assert_eq!(dashboard.currency, "USD");
    assert!(!dashboard.metrics.has_data());
    assert_eq!(dashboard.metrics.net_revenue, 0.0);
    assert_eq!(dashboard.metrics.closing_rate_percent, 0.0);
    assert!(dashboard.transaction_history.is_empty());
}

#[tokio::test]
async fn test_agency_dashboard_missing_agency() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let service = build_service(&db, linked_provider());

    let result = service.agency_dashboard(Uuid::new_v4(), None).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_agency_dashboard_provider_failure_propagates() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let service = build_service(&db, StaticBillingProvider::unavailable("stripe is down"));

    let agency =
        test_data::create_agency(&db.connection, Some(test_data::TEST_ACCOUNT_ID), 5).await;

    let result = service.agency_dashboard(agency.id, Some(2024)).await;
    assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
}

#[tokio::test]
async fn test_subaccount_dashboard_with_funnels() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let service = build_service(&db, linked_provider());

    let agency = test_data::create_agency(&db.connection, None, 5).await;
    let subaccount = test_data::create_subaccount(
        &db.connection,
        agency.id,
        Some(test_data::TEST_ACCOUNT_ID),
    )
    .await;
    test_data::create_funnel_with_pages(
        &db.connection,
        subaccount.id,
        "Webinar",
        &[("Thanks", 3, 2), ("Landing", 10, 0), ("Checkout", 4, 1)],
    )
    .await;
    test_data::create_funnel_with_pages(&db.connection, subaccount.id, "Empty", &[]).await;

    let dashboard = service
        .subaccount_dashboard(subaccount.id, Some(2024))
        .await
        .unwrap();

    assert_eq!(dashboard.agency_id, agency.id);
    assert!(dashboard.billing_linked);

    // サブアカウントでは expired も見込みに含む
    assert_eq!(dashboard.metrics.potential_revenue, 70.0);
    assert_eq!(dashboard.metrics.pending_sessions.len(), 2);
    assert_eq!(dashboard.checkout_activity.len(), 3);

    assert_eq!(dashboard.funnel_performance.len(), 2);
    let webinar = dashboard
        .funnel_performance
        .iter()
        .find(|f| f.name == "Webinar")
        .unwrap();
    let page_names: Vec<_> = webinar.pages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(page_names, vec!["Landing", "Checkout", "Thanks"]);
    assert_eq!(webinar.total_funnel_visits, 17);
    assert_eq!(dashboard.total_funnel_visits, 17);
}

#[tokio::test]
async fn test_subaccount_dashboard_uses_fallback_currency() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let provider = StaticBillingProvider::new().with_account(
        "acct_nocurrency",
        None,
        vec![CheckoutSession::new(
            "cs_1",
            SessionStatus::Complete,
            None,
            test_data::MARCH_2024,
        )],
    );
    let service = build_service(&db, provider);

    let agency = test_data::create_agency(&db.connection, None, 5).await;
    let subaccount =
        test_data::create_subaccount(&db.connection, agency.id, Some("acct_nocurrency")).await;

    let dashboard = service
        .subaccount_dashboard(subaccount.id, Some(2024))
        .await
        .unwrap();

    assert_eq!(dashboard.currency, "USD");
    // 金額なしのセッションは 0 として数える
    assert_eq!(dashboard.metrics.net_revenue, 0.0);
    assert_eq!(dashboard.metrics.closing_rate_percent, 100.0);
    assert_eq!(dashboard.total_funnel_visits, 0);
}

#[tokio::test]
async fn test_subaccount_dashboard_missing_subaccount() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let service = build_service(&db, linked_provider());

    let result = service.subaccount_dashboard(Uuid::new_v4(), Some(2024)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
