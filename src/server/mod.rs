//! MCP server for buyer intake.
//!
//! Exposes the buyer draft and submission to AI assistants through the
//! Model Context Protocol.

pub mod handlers;

pub use handlers::BuyerIntakeServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server over stdio until the client disconnects.
pub async fn run_server(server: BuyerIntakeServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
