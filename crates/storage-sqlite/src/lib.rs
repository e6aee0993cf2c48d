//! SQLite storage implementation for the twstock ingestion service.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the store traits defined in `twstock-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for tickers and price history
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. Everything else works with the `twstock-core` traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!    storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod quotes;
pub mod schema;
pub mod tickers;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from twstock-core for convenience
pub use twstock_core::errors::{DatabaseError, Error, Result};
