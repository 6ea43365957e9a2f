// src/api/handlers/mod.rs
pub mod dashboard_handler;
pub mod system_handler;
