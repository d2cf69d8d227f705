//! DevDocs - search and read local DevDocs documentation.
//!
//! CLI front end over the documentation catalog.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use devdocs::catalog::DocsCatalog;
use devdocs::cli::{Cli, Commands, OutputFormat};
use devdocs::extract::extract_docs;
use devdocs::formatter::{format_doc_sets, format_search_results};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let docs_dir = cli.docs_dir.as_deref();

    match cli.command {
        Commands::Search {
            query,
            doc_set,
            limit,
            format,
        } => handle_search(docs_dir, &query, doc_set.as_deref(), limit, &format),
        Commands::Read { path, exact } => handle_read(docs_dir, &path, !exact),
        Commands::ListSets => handle_list_sets(docs_dir),
        Commands::Extract { output, image } => handle_extract(&output, &image),
    }
}

/// Build a catalog, bailing out when its root does not exist.
fn open_catalog(docs_dir: Option<&Path>) -> DocsCatalog {
    let catalog = DocsCatalog::new(docs_dir);
    if !catalog.root().is_dir() {
        eprintln!(
            "{} Docs directory not found at {}",
            "Error:".red(),
            catalog.root().display()
        );
        eprintln!(
            "{}",
            "Run 'devdocs extract' to fetch the documentation bundle".yellow()
        );
        std::process::exit(1);
    }
    catalog
}

/// Handle the search command.
fn handle_search(
    docs_dir: Option<&Path>,
    query: &str,
    doc_set: Option<&str>,
    limit: usize,
    format: &OutputFormat,
) -> Result<()> {
    let mut catalog = open_catalog(docs_dir);
    let hits = catalog.search(query, doc_set, limit);

    if hits.is_empty() {
        println!("{}", format!("No results found for: {query}").yellow());
        return Ok(());
    }
    format_search_results(&hits, format);
    Ok(())
}

/// Handle the read command.
fn handle_read(docs_dir: Option<&Path>, path: &str, fuzzy: bool) -> Result<()> {
    let mut catalog = open_catalog(docs_dir);

    let Some(content) = catalog.read(path, fuzzy) else {
        eprintln!(
            "{} Documentation file not found at path: {}",
            "Error:".red(),
            path
        );
        eprintln!("{}", "Use 'devdocs search' to find available files".yellow());
        std::process::exit(1);
    };

    println!("{content}");
    Ok(())
}

/// Handle the list-sets command.
fn handle_list_sets(docs_dir: Option<&Path>) -> Result<()> {
    let catalog = open_catalog(docs_dir);
    let sets = catalog.list_sets();

    if sets.is_empty() {
        println!("{}", "No documentation sets found".yellow());
        return Ok(());
    }
    format_doc_sets(&sets);
    Ok(())
}

/// Handle the extract command.
fn handle_extract(output: &Path, image: &str) -> Result<()> {
    println!("Extracting docs from {image} to {}...", output.display());
    let docs_root = extract_docs(output, image)?;
    println!(
        "{} Extracted docs to {}",
        "✓".green(),
        docs_root.display()
    );
    Ok(())
}
