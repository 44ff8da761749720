//! Stateless JSON-over-HTTP transport
//!
//! `POST /mcp` carries one JSON-RPC message per request body. Requests get
//! the JSON-RPC response back; notifications get `202 Accepted`. There is no
//! SSE stream and no session; every POST stands alone.
//!
//! Browser-originated requests are only served when their `Origin` is a
//! loopback host or explicitly allowed. Requests without `Origin` (CLI and
//! desktop clients) are always served.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::ORIGIN;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::error::Result;
use crate::mcp::server::McpServer;
use crate::mcp::types::{JsonRpcError, JsonRpcResponse};

/// Path the transport is mounted on
pub const MCP_PATH: &str = "/mcp";

const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "[::1]"];

#[derive(Clone)]
struct HttpState {
    server: Arc<McpServer>,

    /// Extra origins accepted besides loopback, e.g. `https://app.example.com`
    allowed_origins: Arc<Vec<String>>,
}

/// Build the transport router around a shared server, accepting loopback
/// origins only
pub fn router(server: Arc<McpServer>) -> Router {
    router_with_origins(server, Vec::new())
}

/// Build the transport router with additional allowed origins
pub fn router_with_origins(server: Arc<McpServer>, allowed_origins: Vec<String>) -> Router {
    let allowed_origins = allowed_origins
        .into_iter()
        .map(|o| o.trim_end_matches('/').to_ascii_lowercase())
        .collect();

    Router::new()
        .route(MCP_PATH, post(handle_post))
        .with_state(HttpState {
            server,
            allowed_origins: Arc::new(allowed_origins),
        })
}

async fn handle_post(
    State(state): State<HttpState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(origin) = headers.get(ORIGIN) {
        let origin = origin.to_str().unwrap_or_default();
        if !origin_allowed(origin, &state.allowed_origins) {
            tracing::warn!(origin, "rejecting request from disallowed origin");
            return StatusCode::FORBIDDEN.into_response();
        }
    }

    let message = match std::str::from_utf8(&body) {
        Ok(message) => message,
        Err(e) => {
            let error = JsonRpcError::parse_error(format!("request body is not UTF-8: {}", e));
            return Json(JsonRpcResponse::error(None, error)).into_response();
        }
    };

    match state.server.handle_message(message).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

fn origin_allowed(origin: &str, allowed: &[String]) -> bool {
    let origin = origin.trim_end_matches('/').to_ascii_lowercase();
    if allowed.iter().any(|a| *a == origin) {
        return true;
    }
    match origin_host(&origin) {
        Some(host) => LOOPBACK_HOSTS.contains(&host),
        None => false,
    }
}

/// Host part of `scheme://host[:port]`; IPv6 hosts keep their brackets
fn origin_host(origin: &str) -> Option<&str> {
    let (scheme, authority) = origin.split_once("://")?;
    if scheme != "http" && scheme != "https" {
        return None;
    }
    if authority.starts_with('[') {
        let end = authority.find(']')?;
        return Some(&authority[..=end]);
    }
    authority.split(':').next().filter(|h| !h.is_empty())
}

/// Serve the transport until Ctrl-C
pub async fn serve(
    server: Arc<McpServer>,
    addr: SocketAddr,
    allowed_origins: Vec<String>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, path = MCP_PATH, "serving MCP over HTTP");

    axum::serve(listener, router_with_origins(server, allowed_origins))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP transport stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, draining connections"),
        Err(e) => tracing::warn!(error = %e, "could not listen for Ctrl-C"),
    }
}
