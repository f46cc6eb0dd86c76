//! shoplist-server: in-memory shopping list HTTP API
//!
//! Layers, leaf first:
//! - `db`: the injected item store and the repository over it
//! - `service`: request validation and outcome classification
//! - `http`: axum routes, extractors, error responses and server lifecycle

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ConfigError, ServerConfig};
pub use db::Store;
pub use http::{build_router, run_server, ApiError, AppState, ServerError};
pub use service::{ServiceError, ShoppingListService};
