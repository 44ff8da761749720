//! MCP Server implementation
//!
//! JSON-RPC method router shared by the stdio and HTTP transports.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::{McpError, Result};
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;

/// MCP Server info
pub const SERVER_NAME: &str = "unusualwhales-mcp";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of a single method handler
type MethodResult = std::result::Result<Value, JsonRpcError>;

/// MCP Server for the Unusual Whales API
pub struct McpServer {
    /// Tool handler
    tool_handler: ToolHandler,

    /// Set once the client confirms initialization
    initialized: AtomicBool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(tool_handler: ToolHandler) -> Self {
        Self {
            tool_handler,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Run the server on stdio, one JSON-RPC message per line
    pub async fn run_stdio(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!("serving MCP over stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line).await {
                let mut out = serde_json::to_vec(&response)?;
                out.push(b'\n');
                stdout.write_all(&out).await?;
                stdout.flush().await?;
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw JSON-RPC message; `None` for notifications
    pub async fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        let raw: Value = match serde_json::from_str(message) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable JSON-RPC message");
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(e.to_string()),
                ));
            }
        };

        // A null id is neither a request nor a notification
        if matches!(raw.get("id"), Some(Value::Null)) {
            tracing::warn!("rejecting JSON-RPC message with null id");
            return Some(JsonRpcResponse::error(
                None,
                McpError::protocol("request id must be a string or number, not null").into(),
            ));
        }

        // Salvage the id so a malformed request still gets a matching reply
        let id = raw
            .get("id")
            .cloned()
            .and_then(|id| serde_json::from_value::<RequestId>(id).ok());

        match serde_json::from_value::<JsonRpcRequest>(raw) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                McpError::protocol(e.to_string()).into(),
            )),
        }
    }

    /// Route a decoded request to its method handler
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            self.handle_notification(&request);
            return None;
        };

        tracing::debug!(method = %request.method, "handling request");

        let outcome = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(request.params),
            methods::PING => Ok(json!({})),
            methods::LIST_TOOLS => self.handle_list_tools(),
            methods::CALL_TOOL => self.handle_call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(Some(id), result),
            Err(error) => JsonRpcResponse::error(Some(id), error),
        })
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            methods::INITIALIZED => {
                self.initialized.store(true, Ordering::Release);
                tracing::info!("client initialized");
            }
            other => tracing::debug!(method = other, "ignoring notification"),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self, params: Option<Value>) -> MethodResult {
        let params: InitializeParams = params
            .and_then(|p| serde_json::from_value(p).ok())
            .unwrap_or_default();
        let client = params
            .client_info
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("unknown");
        tracing::info!(
            client,
            requested_version = params.protocol_version.as_deref().unwrap_or("unspecified"),
            "initialize"
        );

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability::default()),
            },
        };

        to_result(&result)
    }

    /// Handle list tools request
    fn handle_list_tools(&self) -> MethodResult {
        let result = ListToolsResult {
            tools: self.tool_handler.list_tools().to_vec(),
        };

        to_result(&result)
    }

    /// Handle call tool request
    async fn handle_call_tool(&self, params: Option<Value>) -> MethodResult {
        let params: CallToolParams = match params {
            Some(p) => serde_json::from_value(p).map_err(|e| {
                JsonRpcError::invalid_params(format!("Invalid tool parameters: {}", e))
            })?,
            None => return Err(JsonRpcError::invalid_params("Missing tool parameters")),
        };

        let result = self
            .tool_handler
            .call_tool(&params.name, params.arguments)
            .await?;

        to_result(&result)
    }
}

fn to_result<T: serde::Serialize>(value: &T) -> MethodResult {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
