// src/domain/mod.rs
pub mod agency_model;
pub mod billing_link;
pub mod checkout_session;
pub mod funnel_model;
pub mod funnel_page_model;
pub mod funnel_performance;
pub mod metrics;
pub mod subaccount_model;
pub mod year_window;
