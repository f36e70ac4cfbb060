//! MCP server exposing ABN validation and lookup.
//!
//! This module provides the MCP protocol server that lets AI assistants validate
//! ABNs and look up registered legal names through the Model Context Protocol.

pub mod handlers;

pub use handlers::AbnMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the ABN MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: AbnMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
