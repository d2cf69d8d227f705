//! DevDocs - search and read local DevDocs documentation.
//!
//! Indexes a tree of pre-extracted DevDocs HTML pages, grouped into
//! named documentation sets, and answers three queries: list the sets,
//! fuzzy-search entries by name, and read an entry as Markdown.
//!
//! ## Features
//!
//! - Lazy in-memory catalog of all documentation entries
//! - Weighted-ratio fuzzy search with per-set filtering
//! - Fuzzy path fallback when reading a mistyped entry
//! - HTML to Markdown conversion with chrome stripping
//! - Bundle extraction from the official DevDocs Docker image

pub mod catalog;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod formatter;
pub mod matcher;

pub use catalog::{DocEntry, DocsCatalog, SearchHit, normalize_stem};
pub use cli::{Cli, Commands};
pub use error::{DevdocsError, Result};
