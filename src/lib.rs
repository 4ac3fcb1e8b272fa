//! # musea
//!
//! Aggregates artwork search and detail lookups across multiple museum
//! collection APIs into a single normalized artwork model, served as a
//! small JSON HTTP API.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: core data structures (Artwork, SearchCriteria, facets)
//! - [`providers`]: one adapter per upstream museum API
//! - [`normalize`]: provider record to unified artwork mapping
//! - [`engine`]: concurrent fan-out, pagination, partial-failure handling
//! - [`server`]: JSON HTTP surface
//! - [`config`]: configuration management

pub mod config;
pub mod engine;
pub mod http;
pub mod models;
pub mod normalize;
pub mod providers;
pub mod server;

// Re-export commonly used types
pub use engine::{AggregationEngine, AggregationError};
pub use models::{AggregatedResult, Artwork, SearchCriteria};
pub use providers::Provider;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
