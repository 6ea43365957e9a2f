// src/api/dto/mod.rs
pub mod dashboard_dto;
