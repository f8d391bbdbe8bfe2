//! SQLite store integration
//!
//! Embedded backend on `rusqlite`, for single-node deployments and tests.

pub mod adapter;
pub mod client;
pub mod schema;

pub use adapter::SqliteAdapter;
pub use client::SqliteClient;
