// src/service/mod.rs
pub mod billing_service;
pub mod dashboard_service;
