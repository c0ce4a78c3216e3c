//! Configuration for the SWIFT HTTP server.

use serde::{Deserialize, Serialize};

/// Default upload size limit: 250 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 250 * 1024 * 1024;

/// Configuration for the SWIFT HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// The host address to bind to.
    pub host: String,

    /// The port to bind to.
    pub port: u16,

    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: u64,

    /// Per-request timeout for message processing, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: 30,
        }
    }
}

impl HttpConfig {
    /// Returns the full server address as a string (e.g., "127.0.0.1:8000").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
