//! DevDocs MCP Server - Entry point with stdio transport.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use devdocs_mcp::DevdocsMcpServer;

/// DevDocs MCP Server - Model Context Protocol server for local DevDocs.
#[derive(Parser, Debug)]
#[command(name = "devdocs-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the docs directory.
    #[arg(long, env = devdocs::config::DOCS_DIR_ENV)]
    docs_dir: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging to stderr (stdout is used for MCP communication)
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let server = DevdocsMcpServer::new(args.docs_dir);

    tracing::info!("Starting DevDocs MCP server with stdio transport");

    // Serve using stdio transport
    let service = server.serve(rmcp::transport::stdio()).await?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}
