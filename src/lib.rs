//! PricePeek-RS: a mock price-comparison API written in Rust
//!
//! Resolves free-text product queries against a small built-in catalog,
//! falls back to synthetic listing generation, and reports the cheapest
//! offer per query.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod listing;
pub mod matcher;
pub mod metrics;
pub mod ranker;
pub mod search;
pub mod session;
pub mod web;

pub use catalog::Catalog;
pub use config::Settings;
pub use listing::Listing;
pub use search::SearchPipeline;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
