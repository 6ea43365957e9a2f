// src/config.rs
pub mod app;
pub mod stripe;

pub use app::AppConfig;
pub use stripe::StripeConfig;
