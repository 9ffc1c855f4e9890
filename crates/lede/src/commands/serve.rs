//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use lede_core::Summarizer;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    summarizer: Summarizer,
    summary_length: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    info!(summary_length, max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let service = ProjectServer::new(summarizer, summary_length, max_input_bytes)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    info!("MCP server stopped");
    Ok(())
}
