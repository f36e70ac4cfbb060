//! MCP tool handlers for the ABN server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::client::AsyncRegistryClient;
use crate::domain::validate;
use crate::error::AbnLookupError;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes ABN validation and lookup tools.
#[derive(Clone)]
pub struct AbnMcpServer {
    client: Arc<dyn AsyncRegistryClient>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for AbnMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Validates Australian Business Numbers and looks up their registered legal names on the ABN Lookup registry.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AbnParams {
    /// Eleven-digit ABN without spaces
    abn: String,
}

/// Local validation outcome for an ABN, as returned by `validate_abn`.
pub fn validation_report(abn: &str) -> serde_json::Value {
    match validate(abn) {
        Ok(()) => serde_json::json!({
            "abn": abn,
            "valid": true,
        }),
        Err(e) => serde_json::json!({
            "abn": abn,
            "valid": false,
            "error_kind": e.kind(),
            "message": e.to_string(),
        }),
    }
}

/// Convert a lookup failure to an MCP error that still carries its kind.
///
/// Failures caused by the caller's input map to `INVALID_PARAMS`, everything else
/// to `INTERNAL_ERROR`.
pub fn lookup_error_to_mcp(e: &AbnLookupError) -> McpError {
    let code = if e.is_validation() {
        ErrorCode::INVALID_PARAMS
    } else {
        ErrorCode::INTERNAL_ERROR
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: Some(serde_json::json!({ "error_kind": e.kind() })),
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Tool router implementation
#[tool_router]
impl AbnMcpServer {
    /// Create a new ABN MCP server.
    pub fn new(client: Arc<dyn AsyncRegistryClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Check an ABN's format and checksum without contacting the registry.
    #[tool(
        description = "Check whether an Australian Business Number is well formed: eleven digits with a valid checksum. Does not contact the registry."
    )]
    async fn validate_abn(
        &self,
        params: Parameters<AbnParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let report = validation_report(&params.abn);
        let json_response = serde_json::to_string_pretty(&report).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Look up the registered legal name for an ABN.
    #[tool(
        description = "Look up an Australian Business Number on the ABN Lookup registry and return its registered legal name. Fails with RecordNotFound if the registry has no record."
    )]
    async fn lookup_abn(&self, params: Parameters<AbnParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: lookup_abn called");
        tracing::debug!("Parameters: abn={}", params.abn);

        let result = self.client.fetch(&params.abn).await.map_err(|e| {
            tracing::error!("ABN lookup failed: {:?}", e);
            lookup_error_to_mcp(&e)
        })?;

        tracing::info!("ABN {} resolved to {}", result.abn(), result.name());
        let json_response = serde_json::to_string_pretty(&result).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
