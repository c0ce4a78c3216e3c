use chrono::NaiveDateTime;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::env;
use std::path::{Path, PathBuf};
use swift_msg::{Mt799Fields, SwiftEnvelope};
use tracing::{debug, info, warn};

use super::error::StorageError;
use super::models::Mt799Record;

/// Storage backend for parsed MT799 messages
///
/// Maintains two tables: `swift_messages` for the five-block envelope and
/// `mt799_fields` for the validated fields, written together in one
/// transaction. Uses sqlx's built-in connection pooling for concurrent
/// access and a native async API.
#[derive(Clone, Debug)]
pub struct Storage {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl Storage {
    /// Create a new in-memory storage instance for testing
    /// This provides complete isolation between tests with no file system dependencies
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        info!("Initializing in-memory storage for testing");

        let db_url = "sqlite://:memory:";

        // In-memory databases don't benefit from multiple connections
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(db_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;

        Ok(Storage {
            pool,
            db_path: PathBuf::from(":memory:"),
        })
    }

    /// Create a new Storage instance
    ///
    /// This will initialize a SQLite database at the specified path (or
    /// default location), run any pending migrations, and set up a
    /// connection pool.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to the database file. If None, uses
    ///   `SWIFT_NODE_DB_PATH` env var or defaults to `./swift-node.db`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if database initialization, migrations, or
    /// pool creation fail.
    pub async fn new(path: Option<PathBuf>) -> Result<Self, StorageError> {
        let db_path = path.unwrap_or_else(|| {
            env::var("SWIFT_NODE_DB_PATH")
                .unwrap_or_else(|_| "swift-node.db".to_string())
                .into()
        });

        info!("Initializing storage at: {:?}", db_path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create connection URL for SQLite with create mode
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect(&db_url)
            .await?;

        // Enable WAL mode and other optimizations
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await?;
        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;

        Ok(Storage { pool, db_path })
    }

    /// Get the database path
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Insert a validated MT799 message
    ///
    /// Writes the envelope row and the fields row in one transaction and
    /// returns the stored record with its server-assigned ids and creation
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either insert fails; the transaction is
    /// rolled back on drop.
    pub async fn insert_mt799(
        &self,
        envelope: &SwiftEnvelope,
        fields: &Mt799Fields,
    ) -> Result<Mt799Record, StorageError> {
        debug!("Inserting MT799 with reference {}", fields.reference);

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO swift_messages (basic_header, application_header, user_header, text_block, trailer)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, created_at
            "#,
        )
        .bind(&envelope.basic_header)
        .bind(&envelope.application_header)
        .bind(&envelope.user_header)
        .bind(&envelope.text_block)
        .bind(&envelope.trailer)
        .fetch_one(&mut *tx)
        .await?;

        let swift_message_id: i64 = row.get("id");
        let created_at: NaiveDateTime = row.get("created_at");

        let row = sqlx::query(
            r#"
            INSERT INTO mt799_fields (swift_message_id, reference, related_reference, narrative)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(swift_message_id)
        .bind(&fields.reference)
        .bind(&fields.related_reference)
        .bind(&fields.narrative)
        .fetch_one(&mut *tx)
        .await?;

        let id: i64 = row.get("id");

        tx.commit().await?;

        info!(
            "MT799 inserted successfully with id: {}, swift_message_id: {}",
            id, swift_message_id
        );

        Ok(Mt799Record {
            id,
            swift_message_id,
            basic_header: envelope.basic_header.clone(),
            application_header: envelope.application_header.clone(),
            user_header: envelope.user_header.clone(),
            text_block: envelope.text_block.clone(),
            trailer: envelope.trailer.clone(),
            reference: fields.reference.clone(),
            related_reference: fields.related_reference.clone(),
            narrative: fields.narrative.clone(),
            created_at,
        })
    }

    /// Retrieve a stored MT799 record by id
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` when no record with the given id
    /// exists.
    pub async fn get_mt799(&self, id: i64) -> Result<Mt799Record, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT f.id, f.swift_message_id, f.reference, f.related_reference, f.narrative,
                   m.basic_header, m.application_header, m.user_header, m.text_block, m.trailer,
                   m.created_at
            FROM mt799_fields f
            JOIN swift_messages m ON m.id = f.swift_message_id
            WHERE f.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(record_from_row(&row)),
            None => {
                warn!("MT799 record not found with id: {}", id);
                Err(StorageError::NotFound(id))
            }
        }
    }

    /// List stored MT799 records, newest first
    pub async fn list_mt799(&self, limit: u32, offset: u32) -> Result<Vec<Mt799Record>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.swift_message_id, f.reference, f.related_reference, f.narrative,
                   m.basic_header, m.application_header, m.user_header, m.text_block, m.trailer,
                   m.created_at
            FROM mt799_fields f
            JOIN swift_messages m ON m.id = f.swift_message_id
            ORDER BY f.id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }
}

fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> Mt799Record {
    Mt799Record {
        id: row.get("id"),
        swift_message_id: row.get("swift_message_id"),
        basic_header: row.get("basic_header"),
        application_header: row.get("application_header"),
        user_header: row.get("user_header"),
        text_block: row.get("text_block"),
        trailer: row.get("trailer"),
        reference: row.get("reference"),
        related_reference: row.get("related_reference"),
        narrative: row.get("narrative"),
        created_at: row.get("created_at"),
    }
}
