// tests/integration/dashboard_api_tests.rs

use crate::common::{
    app_helper::setup_app,
    request::{get_request, response_json},
    test_data,
};
use axum::http::StatusCode;
use dashboard_backend::service::billing_service::StaticBillingProvider;
use tower::ServiceExt;
use uuid::Uuid;

fn linked_provider() -> StaticBillingProvider {
    StaticBillingProvider::new().with_account(
        test_data::TEST_ACCOUNT_ID,
        Some("usd"),
        test_data::sessions_2024(),
    )
}

#[tokio::test]
async fn test_get_agency_dashboard_success() {
    let (app, db) = setup_app(linked_provider()).await;
    let agency =
        test_data::create_agency(&db.connection, Some(test_data::TEST_ACCOUNT_ID), 5).await;

    let response = app
        .oneshot(get_request(&format!(
            "/agencies/{}/dashboard?year=2024",
            agency.id
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(json["success"].as_bool().unwrap());

    let data = &json["data"];
    assert_eq!(data["agency_id"], agency.id.to_string());
    assert_eq!(data["year"], 2024);
    assert_eq!(data["currency"], "USD");
    assert_eq!(data["metrics"]["net_revenue"], 100.0);
    assert_eq!(data["metrics"]["potential_revenue"], 50.0);
    assert_eq!(data["metrics"]["closed_sessions"][0]["status"], "complete");
    assert_eq!(data["metrics"]["closed_sessions"][0]["amount_total"], 100.0);
    assert_eq!(data["conversions"]["total_sessions"], 3);
    assert_eq!(data["active_clients"], 0);
}

#[tokio::test]
async fn test_get_subaccount_dashboard_success() {
    let (app, db) = setup_app(linked_provider()).await;
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
        "Main",
        &[("Landing", 8, 0)],
    )
    .await;

    let response = app
        .oneshot(get_request(&format!(
            "/subaccounts/{}/dashboard?year=2024",
            subaccount.id
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let data = &json["data"];
    assert_eq!(data["subaccount_id"], subaccount.id.to_string());
    assert_eq!(data["metrics"]["potential_revenue"], 70.0);
    assert_eq!(data["checkout_activity"].as_array().unwrap().len(), 3);
    assert_eq!(data["total_funnel_visits"], 8);
    assert_eq!(data["funnel_performance"][0]["pages"][0]["path_name"], "landing");
}

#[tokio::test]
async fn test_dashboard_invalid_uuid_returns_bad_request() {
    let (app, _db) = setup_app(linked_provider()).await;

    let response = app
        .oneshot(get_request("/agencies/not-a-uuid/dashboard"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(!json["success"].as_bool().unwrap());
    assert!(json["message"].as_str().unwrap().contains("agency_id"));
}

#[tokio::test]
async fn test_dashboard_invalid_year_returns_bad_request() {
    let (app, db) = setup_app(linked_provider()).await;
    let agency = test_data::create_agency(&db.connection, None, 5).await;

    for query in ["year=1969", "year=abc"] {
        let response = app
            .clone()
            .oneshot(get_request(&format!(
                "/agencies/{}/dashboard?{}",
                agency.id, query
            )))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "unexpected status for {}",
            query
        );
    }
}

#[tokio::test]
async fn test_dashboard_missing_tenant_returns_not_found() {
    let (app, _db) = setup_app(linked_provider()).await;

    for uri in [
        format!("/agencies/{}/dashboard", Uuid::new_v4()),
        format!("/subaccounts/{}/dashboard", Uuid::new_v4()),
    ] {
        let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {}", uri);

        let json = response_json(response).await;
        assert_eq!(json["error_type"], "not_found");
    }
}

#[tokio::test]
async fn test_dashboard_provider_failure_returns_service_unavailable() {
    let (app, db) = setup_app(StaticBillingProvider::unavailable("stripe is down")).await;
    let agency =
        test_data::create_agency(&db.connection, Some(test_data::TEST_ACCOUNT_ID), 5).await;

    let response = app
        .oneshot(get_request(&format!("/agencies/{}/dashboard", agency.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response_json(response).await;
    assert_eq!(json["error_type"], "external_service_error");
    assert!(!json["message"].as_str().unwrap().contains("stripe is down"));
}
