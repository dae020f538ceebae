//! persona-profesion-server: assigns professions to persons
//!
//! Assignments are persisted locally and enriched at read time with
//! records fetched from three upstream catalogs (persons, professions,
//! statuses).

pub mod config;
pub mod db;
pub mod http;
pub mod join;
pub mod models;
pub mod upstream;

pub use config::{ConfigError, ServiceConfig, UpstreamConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
