//! HTTP server implementation for the SWIFT MT799 ingestion service.
//!
//! The server exposes endpoints for:
//!
//! - Uploading MT799 message files for parsing, validation, and storage
//! - Retrieving stored messages by identifier
//! - Health checks for monitoring system availability
//!
//! The server is built using the Warp web framework and provides graceful
//! shutdown capabilities.

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use crate::handler::{handle_add_mt799, handle_get_mt799, handle_health_check};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use swift_node::SwiftNode;
use tokio::sync::oneshot;
use tracing::{error, info, warn};
use warp::{Filter, Rejection, Reply};

/// SWIFT HTTP server for MT799 message ingestion.
///
/// Routes:
/// - `POST /api/mt799` - upload a message file for parsing and storage
/// - `GET /api/mt799/:id` - retrieve a stored message
/// - `GET /health` - operational status
///
/// The SwiftNode performs the actual parsing, validation, and storage.
pub struct SwiftHttpServer {
    /// Server configuration.
    config: HttpConfig,

    /// SWIFT node for message processing.
    node: Arc<SwiftNode>,

    /// Shutdown channel for graceful server termination.
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl SwiftHttpServer {
    /// Creates a new HTTP server with the given configuration and node.
    pub fn new(config: HttpConfig, node: SwiftNode) -> Self {
        Self {
            config,
            node: Arc::new(node),
            shutdown_tx: None,
        }
    }

    /// Starts the HTTP server.
    ///
    /// Configures the routes, sets up a graceful shutdown channel, and
    /// starts the server in a separate Tokio task. The server runs until
    /// [`stop`](Self::stop) is called.
    pub async fn start(&mut self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .server_addr()
            .parse()
            .map_err(|e| Error::Http(format!("Invalid address: {}", e)))?;

        let routes = routes(self.node.clone(), &self.config);

        let (tx, rx) = oneshot::channel::<()>();
        self.shutdown_tx = Some(tx);

        info!("Starting SWIFT HTTP server on {}", addr);
        let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
            rx.await.ok();
            info!("Shutting down SWIFT HTTP server");
        });

        tokio::spawn(server);

        info!("SWIFT HTTP server started on {}", addr);
        Ok(())
    }

    /// Stops the HTTP server.
    ///
    /// Sends a shutdown signal to the server, allowing it to terminate
    /// gracefully.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            info!("Sent shutdown signal to SWIFT HTTP server");
        } else {
            warn!("SWIFT HTTP server is not running");
        }
        Ok(())
    }

    /// Returns a reference to the underlying SWIFT node.
    pub fn node(&self) -> &Arc<SwiftNode> {
        &self.node
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}

/// Builds the complete route tree for the server.
///
/// Exposed so tests can drive the routes directly with `warp::test` without
/// binding a socket.
pub fn routes(
    node: Arc<SwiftNode>,
    config: &HttpConfig,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let upload_route = warp::path!("api" / "mt799")
        .and(warp::post())
        .and(warp::multipart::form().max_length(config.max_upload_bytes))
        .and(with_node(node.clone()))
        .and(with_timeout(timeout))
        .and_then(handle_add_mt799);

    let get_route = warp::path!("api" / "mt799" / i64)
        .and(warp::get())
        .and(with_node(node))
        .and_then(handle_get_mt799);

    let health_route = warp::path("health")
        .and(warp::get())
        .and_then(handle_health_check);

    upload_route
        .or(get_route)
        .or(health_route)
        .with(warp::log("swift_http"))
        .recover(handle_rejection)
}

/// Helper function to provide the SWIFT node to route handlers.
fn with_node(
    node: Arc<SwiftNode>,
) -> impl Filter<Extract = (Arc<SwiftNode>,), Error = Infallible> + Clone {
    warp::any().map(move || node.clone())
}

/// Helper function to provide the request timeout to route handlers.
fn with_timeout(
    timeout: Duration,
) -> impl Filter<Extract = (Duration,), Error = Infallible> + Clone {
    warp::any().map(move || timeout)
}

/// Handler for rejections.
async fn handle_rejection(err: Rejection) -> std::result::Result<impl Reply, Infallible> {
    let message;
    let status;

    if err.is_not_found() {
        message = "Not Found";
        status = warp::http::StatusCode::NOT_FOUND;
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        message = "File size exceeds the limit";
        status = warp::http::StatusCode::PAYLOAD_TOO_LARGE;
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        message = "Expected a multipart/form-data upload";
        status = warp::http::StatusCode::UNSUPPORTED_MEDIA_TYPE;
    } else {
        error!("Unhandled rejection: {:?}", err);
        message = "Internal Server Error";
        status = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "status": "error",
            "message": message
        })),
        status,
    ))
}
