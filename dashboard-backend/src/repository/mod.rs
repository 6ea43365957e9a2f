// src/repository/mod.rs
pub mod agency_repository;
pub mod funnel_repository;
pub mod subaccount_repository;
