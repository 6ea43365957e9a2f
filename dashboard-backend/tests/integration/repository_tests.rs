// tests/integration/repository_tests.rs

use crate::common::{self, test_data};
use dashboard_backend::domain::billing_link::BillingLink;
use dashboard_backend::repository::{
    agency_repository::AgencyRepository, funnel_repository::FunnelRepository,
    subaccount_repository::SubaccountRepository,
};
use uuid::Uuid;

#[tokio::test]
async fn test_agency_create_and_find() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;

    let agency = test_data::create_agency(&db.connection, Some(test_data::TEST_ACCOUNT_ID), 10).await;

    let repo = AgencyRepository::new(db.connection.clone());
    let found = repo.find_by_id(agency.id).await.unwrap().unwrap();

    assert_eq!(found.name, agency.name);
    assert_eq!(found.goal, 10);
    assert_eq!(
        found.billing_link(),
        BillingLink::Linked(test_data::TEST_ACCOUNT_ID.to_string())
    );

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_agency_without_connect_account_is_unlinked() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;

    let agency = test_data::create_agency(&db.connection, Some("   "), 5).await;

    let repo = AgencyRepository::new(db.connection.clone());
    let found = repo.find_by_id(agency.id).await.unwrap().unwrap();
    assert_eq!(found.billing_link(), BillingLink::Unlinked);
}

#[tokio::test]
async fn test_subaccount_count_by_agency() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;

    let agency = test_data::create_agency(&db.connection, None, 5).await;
    let other = test_data::create_agency(&db.connection, None, 5).await;
    test_data::create_subaccount(&db.connection, agency.id, None).await;
    test_data::create_subaccount(&db.connection, agency.id, None).await;
    test_data::create_subaccount(&db.connection, other.id, None).await;

    let repo = SubaccountRepository::new(db.connection.clone());
    assert_eq!(repo.count_by_agency_id(agency.id).await.unwrap(), 2);
    assert_eq!(repo.count_by_agency_id(Uuid::new_v4()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_funnels_with_pages() {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;

    let agency = test_data::create_agency(&db.connection, None, 5).await;
    let subaccount = test_data::create_subaccount(&db.connection, agency.id, None).await;
    test_data::create_funnel_with_pages(
        &db.connection,
        subaccount.id,
        "Webinar",
        &[("Landing", 10, 0), ("Checkout", 4, 1)],
    )
    .await;

    let repo = FunnelRepository::new(db.connection.clone());
    let funnels = repo
        .find_with_pages_by_subaccount_id(subaccount.id)
        .await
        .unwrap();

    assert_eq!(funnels.len(), 1);
    let (funnel, pages) = &funnels[0];
    assert_eq!(funnel.name, "Webinar");
    assert_eq!(pages.len(), 2);

    let landing = pages.iter().find(|p| p.name == "Landing").unwrap();
    assert_eq!(landing.visits, 10);
    assert_eq!(landing.path_name, "landing");

    // 他のサブアカウントのファネルは含まない
    let other = test_data::create_subaccount(&db.connection, agency.id, None).await;
    assert!(repo
        .find_with_pages_by_subaccount_id(other.id)
        .await
        .unwrap()
        .is_empty());
}
