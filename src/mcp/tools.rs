//! MCP tool registry and dispatcher
//!
//! Every tool is a catalog endpoint. Descriptors are derived from the
//! catalog once; invocations are validated against the same entry before a
//! single GET is issued.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::api::{ApiClient, Catalog, EndpointSpec};
use crate::error::McpError;
use crate::mcp::types::{CallToolResult, Tool};

/// Tool handler
pub struct ToolHandler {
    catalog: Arc<Catalog>,
    client: Arc<ApiClient>,

    /// Descriptors, built once in catalog order
    tools: Vec<Tool>,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(catalog: Arc<Catalog>, client: Arc<ApiClient>) -> Self {
        let tools = describe(&catalog);
        Self {
            catalog,
            client,
            tools,
        }
    }

    /// List all available tools
    pub fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Call a tool by name.
    ///
    /// Unknown names and invalid arguments are protocol faults and never
    /// reach the network. API failures come back in-band as an error result.
    pub async fn call_tool(&self, name: &str, args: Value) -> Result<CallToolResult, McpError> {
        let endpoint = self
            .catalog
            .get(name)
            .ok_or_else(|| McpError::UnknownTool {
                name: name.to_string(),
            })?;

        let validated = endpoint.validate(&args).map_err(|e| {
            tracing::debug!(tool = name, error = %e, "rejected tool arguments");
            e
        })?;
        let path = endpoint.resolve_path(&validated);
        let query = validated.query_pairs();

        let started = Instant::now();
        let result = match self.client.get(&path, &query).await {
            Ok(value) => {
                tracing::info!(
                    tool = name,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "tool call succeeded"
                );
                CallToolResult::json(&value)
            }
            Err(err) => {
                tracing::warn!(
                    tool = name,
                    status = ?err.status(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %err,
                    "tool call failed"
                );
                CallToolResult::error(err.to_string())
            }
        };

        Ok(result)
    }
}

/// Capability descriptors for every catalog endpoint, in catalog order
pub fn describe(catalog: &Catalog) -> Vec<Tool> {
    catalog.iter().map(tool_def).collect()
}

/// Helper to create a tool definition
fn tool_def(endpoint: &EndpointSpec) -> Tool {
    Tool {
        name: endpoint.name.to_string(),
        description: endpoint.description.to_string(),
        input_schema: endpoint.input_schema(),
    }
}
