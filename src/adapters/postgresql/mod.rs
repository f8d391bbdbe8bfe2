//! PostgreSQL store integration
//!
//! Production backend for the clinic tables, on `tokio-postgres` with a
//! `deadpool-postgres` connection pool.

pub mod adapter;
pub mod client;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
