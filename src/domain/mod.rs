//! Core domain types and logic.

pub mod company;
pub mod config_validation;
pub mod error;
pub mod metrics;
pub mod news;
pub mod portfolio;
pub mod price_engine;
pub mod quarterly;
pub mod screener;
pub mod sector;
pub mod seed;
pub mod session;
