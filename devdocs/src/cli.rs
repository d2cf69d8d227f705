//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Search and read a local DevDocs documentation corpus.
#[derive(Parser, Debug)]
#[command(name = "devdocs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the docs directory.
    #[arg(long, global = true, env = crate::config::DOCS_DIR_ENV)]
    pub docs_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fuzzy-search documentation entries by name.
    Search {
        /// Search query.
        query: String,

        /// Restrict to a documentation set (e.g. "python").
        #[arg(short, long)]
        doc_set: Option<String>,

        /// Number of results.
        #[arg(short = 'n', long, default_value_t = crate::config::DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Output format.
        #[arg(long, value_enum, default_value = "cli")]
        format: OutputFormat,
    },

    /// Read a documentation file as Markdown.
    Read {
        /// Path relative to the docs directory (e.g. "python/list.html").
        path: String,

        /// Require an exact path; disable fuzzy fallback.
        #[arg(long)]
        exact: bool,
    },

    /// List available documentation sets.
    ListSets,

    /// Extract the documentation bundle from the DevDocs Docker image.
    Extract {
        /// Output directory for the extracted docs.
        #[arg(short, long, default_value = "docs")]
        output: PathBuf,

        /// Docker image to extract from.
        #[arg(short, long, default_value = crate::config::DEFAULT_DOCKER_IMAGE)]
        image: String,
    },
}

/// Output format options.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    /// CLI-friendly output.
    #[default]
    Cli,
    /// JSON output.
    Json,
    /// Just file paths.
    Files,
}
