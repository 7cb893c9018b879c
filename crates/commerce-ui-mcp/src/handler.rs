//! MCP handler serving the registered tool table

use std::sync::Arc;

use rmcp::{
    model::*, service::RequestContext, ErrorData as McpError, RoleServer, ServerHandler,
};
use tracing::{debug, info};

use commerce_ui_core::branding;

use crate::tools::ToolSet;

/// Serves the registered tool table over MCP.
///
/// The table and everything it closes over are built before the transport
/// opens and never mutated, so the handler is a cheap clone around an
/// `Arc`.
#[derive(Clone)]
pub struct CommerceUiHandler {
    tool_set: Arc<ToolSet>,
}

impl CommerceUiHandler {
    pub fn new(tool_set: Arc<ToolSet>) -> Self {
        Self { tool_set }
    }

    /// All registry tools take no arguments
    fn empty_input_schema() -> Arc<serde_json::Map<String, serde_json::Value>> {
        Arc::new(
            serde_json::from_value(serde_json::json!({"type": "object", "properties": {}}))
                .expect("static input schema"),
        )
    }
}

impl ServerHandler for CommerceUiHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: branding::SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Exposes the commerce-ui component registry. Call a category tool to get \
                 implementation details and usage examples for its items."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _params: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let schema = Self::empty_input_schema();
        let tools: Vec<Tool> = self
            .tool_set
            .tools()
            .iter()
            .map(|spec| Tool::new(spec.name.clone(), spec.description.clone(), schema.clone()))
            .collect();

        debug!(count = tools.len(), "list_tools");
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        params: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = %params.name, "call_tool");

        let spec = self.tool_set.find(&params.name).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown tool: {}", params.name), None)
        })?;

        match self.tool_set.execute(spec).await {
            Ok(payload) => Ok(CallToolResult::success(vec![Content::text(payload)])),
            Err(message) => Ok(CallToolResult {
                content: vec![Content::text(message)],
                structured_content: None,
                is_error: Some(true),
                meta: None,
            }),
        }
    }
}
