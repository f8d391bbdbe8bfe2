//! REST API over axum
//!
//! - [`router`] assembles routes and layers
//! - [`endpoints`] holds one handler per (resource, verb)
//! - [`error`] maps failures to the JSON error envelope
//! - [`server`] binds the listener and handles graceful shutdown
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use myclinic::adapters::sqlite::SqliteAdapter;
//! use myclinic::api::{build_router, AppState};
//! use myclinic::config::{AuthConfig, ServerConfig};
//!
//! let store = Arc::new(SqliteAdapter::in_memory().unwrap());
//! let state = AppState::new(store, &AuthConfig::default());
//! let app = build_router(state, &ServerConfig::default());
//! # let _ = app;
//! ```

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::build_router;
pub use server::serve;
pub use types::AppState;
