//! Storage module for persisting parsed MT799 messages
//!
//! This module provides persistent storage for the SWIFT node, keeping the
//! split envelope and the validated MT799 fields in a SQLite database.
//!
//! # Architecture
//!
//! The storage uses a two-table design matching the two halves of a parsed
//! message:
//! - **swift_messages**: the five-block envelope, one row per message
//! - **mt799_fields**: the validated fields, keyed back to the envelope row
//!
//! Both rows are written in a single transaction; ids and the creation
//! timestamp are server-assigned.
//!
//! # Features
//!
//! - **Automatic Schema Migration**: the schema is created and migrated on
//!   startup via `sqlx::migrate!`
//! - **Connection Pooling**: sqlx's built-in async pool
//! - **In-Memory Mode**: `Storage::new_in_memory()` for isolated tests
//!
//! # Environment Variables
//!
//! - `SWIFT_NODE_DB_PATH`: overrides the default database path

pub mod db;
pub mod error;
pub mod models;

pub use db::Storage;
pub use error::StorageError;
pub use models::Mt799Record;
