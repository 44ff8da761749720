//! Unusual Whales API client
//!
//! Thin authenticated GET client. Every call returns the decoded JSON body or
//! an [`ApiError`]; callers decide how the failure is surfaced.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, Result};

/// Longest body prefix quoted back in a decode error
const SNIPPET_CHARS: usize = 200;

/// Unusual Whales API client
pub struct ApiClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// Origin without trailing slash
    base_url: String,

    /// Bearer token
    api_key: String,

    /// Per-request timeout
    timeout: Duration,
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one authenticated GET and decode the JSON body.
    ///
    /// `path` is already resolved and escaped. `query` pairs are sent in
    /// order; repeated keys are kept as repeated keys.
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> std::result::Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, params = query.len(), "GET");

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = extract_error_message(status, &body);
            tracing::warn!(%url, status = status.as_u16(), %message, "API request failed");
            return Err(ApiError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        decode_body(status, &body)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            tracing::warn!(timeout = ?self.timeout, "API request timed out");
            ApiError::Timeout {
                secs: self.timeout.as_secs_f64(),
            }
        } else {
            tracing::warn!(error = %err, "API request failed before a response");
            ApiError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Decode a 2xx body; an empty body is `null`
fn decode_body(status: StatusCode, body: &str) -> std::result::Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|_| ApiError::Decode {
        status: status.as_u16(),
        snippet: snippet(body),
    })
}

/// Message for a non-2xx response: JSON `message`, else raw body, else the
/// status reason
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            if !message.is_empty() {
                return message.clone();
            }
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}
