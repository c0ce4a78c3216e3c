//! HTTP server for the SWIFT MT799 message ingestion service.
//!
//! This crate provides the HTTP front end over the SWIFT node: it accepts
//! MT799 message files, hands them to the node for parsing, validation, and
//! storage, and serves stored messages back by identifier.
//!
//! # Message Processing Flow
//!
//! 1. **HTTP Request**: client POSTs a multipart upload to `/api/mt799`
//! 2. **Upload Checks**: the `file` part must be present, named `*.txt`,
//!    non-empty, within the size limit, and valid UTF-8
//! 3. **Node Processing**: the raw text goes to `SwiftNode::add_mt799`,
//!    which splits blocks, extracts fields, validates, and persists
//! 4. **HTTP Response**: 201 with the stored record, or 400 naming the
//!    offending field and rule
//!
//! # Key Components
//!
//! - **Handler**: request/response processing with upload validation
//! - **Server**: Warp-based HTTP server with graceful shutdown
//! - **Config**: bind address, upload limit, and request timeout
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use swift_http::{HttpConfig, SwiftHttpServer};
//! use swift_node::{NodeConfig, SwiftNode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let node = SwiftNode::new(NodeConfig::default()).await?;
//!
//!     let config = HttpConfig::default();
//!     let mut server = SwiftHttpServer::new(config, node);
//!
//!     server.start().await?;
//!     tokio::signal::ctrl_c().await?;
//!     server.stop().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod server;

pub use config::HttpConfig;
pub use error::{Error, Result};
pub use server::{routes, SwiftHttpServer};
