//! Orchestration and persistence for MT799 message ingestion.
//!
//! The [`SwiftNode`] ties the pure parsing/validation core of `swift-msg` to
//! a SQLite-backed [`storage`] layer: a raw message is split into blocks,
//! its fields extracted and validated, and only then persisted. A message
//! that fails validation is never stored.
//!
//! The node holds no mutable state of its own; it can be shared across
//! threads with an `Arc<SwiftNode>`.

pub mod error;
pub mod storage;

use std::path::PathBuf;

use tracing::info;

use swift_msg::{parse_mt799, validate};

pub use error::{Error, Result};
pub use storage::{Mt799Record, Storage, StorageError};

/// Configuration for a SWIFT node
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Path to the SQLite database file. `None` selects the
    /// `SWIFT_NODE_DB_PATH` env var or the default `./swift-node.db`.
    pub storage_path: Option<PathBuf>,
}

/// The SWIFT node: parses, validates, and persists MT799 messages.
pub struct SwiftNode {
    /// Persistent storage for parsed messages
    storage: Storage,
    /// Node configuration
    config: NodeConfig,
}

impl SwiftNode {
    /// Create a node backed by on-disk storage at the configured path
    pub async fn new(config: NodeConfig) -> Result<Self> {
        let storage = Storage::new(config.storage_path.clone()).await?;
        Ok(Self { storage, config })
    }

    /// Create a node backed by in-memory storage, for testing
    pub async fn new_in_memory() -> Result<Self> {
        let storage = Storage::new_in_memory().await?;
        Ok(Self {
            storage,
            config: NodeConfig::default(),
        })
    }

    /// Parse, validate, and persist a raw MT799 message.
    ///
    /// Parse and validation failures are returned to the caller unchanged
    /// and nothing is persisted.
    pub async fn add_mt799(&self, raw: &str) -> Result<Mt799Record> {
        let (envelope, fields) = parse_mt799(raw)?;
        validate(&fields)?;

        let record = self.storage.insert_mt799(&envelope, &fields).await?;
        info!(
            id = record.id,
            reference = %record.reference,
            "stored MT799 message"
        );
        Ok(record)
    }

    /// Retrieve a stored MT799 message by identifier.
    ///
    /// Returns [`Error::NotFound`] when no record with the given id exists.
    pub async fn get_mt799(&self, id: i64) -> Result<Mt799Record> {
        info!("Fetching MT799 message with id: {}", id);
        Ok(self.storage.get_mt799(id).await?)
    }

    /// List stored MT799 messages, newest first
    pub async fn list_mt799(&self, limit: u32, offset: u32) -> Result<Vec<Mt799Record>> {
        Ok(self.storage.list_mt799(limit, offset).await?)
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Access the node configuration
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }
}
