//! Core domain types and logic.

pub mod bar;
pub mod constant;
pub mod datafeed;
pub mod datafeed_config;
pub mod error;
pub mod interval_map;
pub mod price_table;
pub mod request;
