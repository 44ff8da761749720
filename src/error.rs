//! Error types for the Unusual Whales MCP Server
//!
//! This module defines the error hierarchy for all operations in the server.

use thiserror::Error;

/// Main error type for the Unusual Whales MCP Server
#[derive(Error, Debug)]
pub enum UwMcpError {
    /// Unusual Whales API errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Endpoint catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failures of a single outbound API call.
///
/// These never escape a tool call as protocol faults; the dispatcher reports
/// them in-band with `isError: true`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS or TLS failure before any status was received
    #[error("API Error: {message}")]
    Transport { message: String },

    #[error("API Error: request timed out after {secs} seconds")]
    Timeout { secs: f64 },

    /// Non-2xx response
    #[error("API Error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("API Error ({status}): invalid JSON response: {snippet}")]
    Decode { status: u16, snippet: String },
}

impl ApiError {
    /// HTTP status of the failed call, if the remote answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { .. } | ApiError::Timeout { .. } => None,
            ApiError::Remote { status, .. } | ApiError::Decode { status, .. } => Some(*status),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingEnvVar { var: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Endpoint catalog construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate tool name: {name}")]
    DuplicateTool { name: String },

    #[error("Tool {tool}: placeholder {{{placeholder}}} is not a declared path parameter")]
    UndeclaredPlaceholder { tool: String, placeholder: String },

    #[error("Tool {tool}: path parameter '{param}' does not appear in the path template")]
    UnusedPathParam { tool: String, param: String },

    #[error("Tool {tool}: unterminated placeholder in path template '{template}'")]
    UnterminatedPlaceholder { tool: String, template: String },
}

/// MCP protocol errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid tool arguments: {message}")]
    InvalidArguments { message: String },

    #[error("Protocol error: {message}")]
    ProtocolError { message: String },
}

impl McpError {
    pub(crate) fn invalid_arguments(message: impl Into<String>) -> Self {
        McpError::InvalidArguments {
            message: message.into(),
        }
    }

    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        McpError::ProtocolError {
            message: message.into(),
        }
    }
}

/// Result type alias for Unusual Whales MCP operations
pub type Result<T> = std::result::Result<T, UwMcpError>;
