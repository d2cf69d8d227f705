//! DevDocs MCP Server - Model Context Protocol server for local DevDocs.
//!
//! This crate provides an MCP server that exposes the devdocs catalog's
//! search and retrieval operations to AI assistants via the Model
//! Context Protocol.
//!
//! ## Features
//!
//! - **Tools**: `search_devdocs`, `read_devdocs`, `list_doc_sets`
//! - **Transport**: stdio
//!
//! ## Usage
//!
//! ```bash
//! # Serve the default docs location
//! devdocs-mcp
//!
//! # Serve an explicit docs tree
//! devdocs-mcp --docs-dir /path/to/docs
//! ```

pub mod server;

pub use server::DevdocsMcpServer;
