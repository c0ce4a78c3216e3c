//! Request handlers for the SWIFT HTTP server.
//!
//! This module provides the HTTP request handlers for MT799 upload and
//! retrieval, plus a health check. Upload handling enforces the file-level
//! rules (a `file` part must be present, named `*.txt`, non-empty, valid
//! UTF-8) before the raw text is handed to the SWIFT node for parsing,
//! validation, and storage.

use crate::error::{Error, Result};
use bytes::BufMut;
use futures::TryStreamExt;
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use swift_node::{Mt799Record, SwiftNode};
use tracing::{error, info, warn};
use warp::multipart::{FormData, Part};
use warp::{self, hyper::StatusCode, reply::json, Reply};

/// Response structure for health checks.
#[derive(Serialize)]
struct HealthResponse {
    /// Status of the server, always "ok" when reachable
    status: String,
    /// Current version of the swift-http package
    version: String,
}

/// Handler for health check requests.
///
/// Returns a simple response with the status "ok" and the current version
/// number, so monitoring systems can verify the server is operational.
pub async fn handle_health_check() -> std::result::Result<impl Reply, Infallible> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(json(&response))
}

/// Handler for MT799 upload requests.
///
/// Reads the uploaded file, then delegates to the SWIFT node, which parses,
/// validates, and persists the message. A message that fails parsing or
/// validation produces a 400 response naming the offending field and rule;
/// a stored message produces a 201 response with the full record.
pub async fn handle_add_mt799(
    form: FormData,
    node: Arc<SwiftNode>,
    timeout: Duration,
) -> std::result::Result<impl Reply, Infallible> {
    match add_mt799(form, node, timeout).await {
        Ok(record) => {
            info!(id = record.id, "MT799 message stored");
            Ok(record_response(StatusCode::CREATED, &record))
        }
        Err(e) => {
            error!("MT799 upload failed: {}", e);
            Ok(e.to_response())
        }
    }
}

async fn add_mt799(form: FormData, node: Arc<SwiftNode>, timeout: Duration) -> Result<Mt799Record> {
    let message = read_upload(form).await?;

    // The parse itself is bounded by input length; the timeout covers the
    // storage round trip.
    match tokio::time::timeout(timeout, node.add_mt799(&message)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(Error::Timeout(timeout.as_secs())),
    }
}

/// Read the `file` part of a multipart upload into a UTF-8 string.
///
/// Rejects requests without a `file` part, with a filename not ending in
/// `.txt`, or with empty content. The overall size limit is enforced by the
/// route filter before this runs.
async fn read_upload(form: FormData) -> Result<String> {
    let parts: Vec<Part> = form
        .try_collect()
        .await
        .map_err(|e| Error::Upload(format!("Malformed multipart request: {}", e)))?;

    let part = parts
        .into_iter()
        .find(|p| p.name() == "file")
        .ok_or_else(|| Error::Upload("No file provided.".to_string()))?;

    let file_name = part.filename().unwrap_or_default().to_string();
    if !file_name.to_lowercase().ends_with(".txt") {
        warn!("File upload failed: invalid file format: {:?}", file_name);
        return Err(Error::Upload(
            "Invalid file format. Only .txt files are supported.".to_string(),
        ));
    }

    let data = part
        .stream()
        .try_fold(Vec::new(), |mut acc, buf| {
            acc.put(buf);
            async move { Ok(acc) }
        })
        .await
        .map_err(|e| Error::Upload(format!("Failed to read upload: {}", e)))?;

    if data.is_empty() {
        warn!("File upload failed: no file provided");
        return Err(Error::Upload("No file provided.".to_string()));
    }

    info!(
        "File received successfully: file_name: {}, size: {}",
        file_name,
        data.len()
    );

    String::from_utf8(data)
        .map_err(|_| Error::Upload("Invalid UTF-8 in uploaded file.".to_string()))
}

/// Handler for MT799 retrieval by identifier.
pub async fn handle_get_mt799(
    id: i64,
    node: Arc<SwiftNode>,
) -> std::result::Result<impl Reply, Infallible> {
    match node.get_mt799(id).await {
        Ok(record) => Ok(record_response(StatusCode::OK, &record)),
        Err(e) => {
            warn!("Failed to retrieve MT799 message with id {}: {}", id, e);
            Ok(Error::from(e).to_response())
        }
    }
}

/// Create a JSON response carrying a stored record.
fn record_response(status: StatusCode, record: &Mt799Record) -> warp::reply::Response {
    warp::reply::with_status(json(record), status).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use warp::hyper::body::to_bytes;

    #[tokio::test]
    async fn test_health_check() {
        let response = handle_health_check().await.unwrap();

        let response_bytes = to_bytes(response.into_response().into_body())
            .await
            .unwrap();
        let response_json: Value = serde_json::from_slice(&response_bytes).unwrap();

        assert_eq!(response_json["status"], "ok");
        assert!(response_json["version"].is_string());
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_not_found() {
        let node = Arc::new(SwiftNode::new_in_memory().await.unwrap());

        let response = handle_get_mt799(999, node).await.unwrap();
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response_bytes = to_bytes(response.into_body()).await.unwrap();
        let response_json: Value = serde_json::from_slice(&response_bytes).unwrap();
        assert_eq!(response_json["status"], "error");
        assert_eq!(response_json["error"]["type"], "not_found");
    }
}
