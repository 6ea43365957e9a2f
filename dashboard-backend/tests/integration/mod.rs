// tests/integration/mod.rs

pub mod dashboard_api_tests;
pub mod dashboard_service_tests;
pub mod repository_tests;
