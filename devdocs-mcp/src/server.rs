//! MCP Server implementation for devdocs.
//!
//! Uses `spawn_blocking` to run the synchronous catalog operations in a
//! dedicated thread pool. One long-lived catalog is shared behind a
//! mutex, since its lazy cache is not safe to build concurrently.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use devdocs::catalog::DocsCatalog;
use devdocs::config::DEFAULT_SEARCH_LIMIT;
use rmcp::{
    ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, InitializeResult, ProtocolVersion,
        ServerCapabilities,
    },
    schemars::JsonSchema,
    tool, tool_handler, tool_router,
};
use serde::Deserialize;

/// Type alias for ServerInfo (same as InitializeResult).
type ServerInfo = InitializeResult;

/// DevDocs MCP server that provides documentation search and retrieval tools.
#[derive(Clone, Debug)]
pub struct DevdocsMcpServer {
    /// Shared documentation catalog.
    catalog: Arc<Mutex<DocsCatalog>>,
    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl DevdocsMcpServer {
    /// Create a new DevDocs MCP server over the given docs directory,
    /// or the default docs location when none is given.
    #[must_use]
    pub fn new(docs_dir: Option<PathBuf>) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(DocsCatalog::new(docs_dir.as_deref()))),
            tool_router: Self::tool_router(),
        }
    }
}

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query to find documentation.
    pub query: String,
    /// Documentation set to search within (e.g. 'python', 'javascript').
    pub doc_set: Option<String>,
    /// Maximum number of results (default: 20).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Parameters for the read tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadParams {
    /// Path to the documentation file, relative to the docs directory.
    pub path: String,
}

fn default_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

/// Convert an internal error to an MCP error.
fn to_mcp_error(e: impl std::fmt::Display) -> rmcp::ErrorData {
    rmcp::ErrorData::internal_error(e.to_string(), None)
}

#[tool_router]
impl DevdocsMcpServer {
    /// Fuzzy-search documentation entries by name. Returns matching
    /// entries with their path, display name, score, and doc set.
    #[tool(name = "search_devdocs")]
    async fn search_devdocs(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let p = params.0;
        let catalog = Arc::clone(&self.catalog);

        let hits = tokio::task::spawn_blocking(move || {
            let mut catalog = catalog.lock().unwrap_or_else(PoisonError::into_inner);
            catalog.search(&p.query, p.doc_set.as_deref(), p.limit)
        })
        .await
        .map_err(to_mcp_error)?;

        let summary = if hits.is_empty() {
            "No results found".to_string()
        } else {
            hits.iter()
                .map(|hit| {
                    format!("{}% [{}] {} - {}", hit.score, hit.doc_set, hit.name, hit.path)
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        Ok(CallToolResult::success(vec![Content::text(summary)]))
    }

    /// Read a documentation file and return it as Markdown. Imprecise
    /// paths fall back to the closest matching entry.
    #[tool(name = "read_devdocs")]
    async fn read_devdocs(
        &self,
        params: Parameters<ReadParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let p = params.0;
        let path_for_err = p.path.clone();
        let catalog = Arc::clone(&self.catalog);

        let content = tokio::task::spawn_blocking(move || {
            let mut catalog = catalog.lock().unwrap_or_else(PoisonError::into_inner);
            catalog.read(&p.path, true)
        })
        .await
        .map_err(to_mcp_error)?;

        match content {
            Some(markdown) => Ok(CallToolResult::success(vec![Content::text(markdown)])),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                "Error: Documentation file not found at path: {path_for_err}"
            ))])),
        }
    }

    /// List all available documentation sets.
    #[tool(name = "list_doc_sets")]
    async fn list_doc_sets(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        let catalog = Arc::clone(&self.catalog);

        let sets = tokio::task::spawn_blocking(move || {
            let catalog = catalog.lock().unwrap_or_else(PoisonError::into_inner);
            catalog.list_sets()
        })
        .await
        .map_err(to_mcp_error)?;

        let summary = if sets.is_empty() {
            "No documentation sets found".to_string()
        } else {
            sets.join("\n")
        };

        Ok(CallToolResult::success(vec![Content::text(summary)]))
    }
}

#[tool_handler]
impl ServerHandler for DevdocsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "devdocs".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "DevDocs documentation server. Use 'search_devdocs' to find reference entries, \
                 'read_devdocs' to fetch a page as Markdown, 'list_doc_sets' to see what is available."
                    .into(),
            ),
        }
    }
}
