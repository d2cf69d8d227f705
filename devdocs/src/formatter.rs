//! Output formatting utilities.

use colored::Colorize;

use crate::catalog::SearchHit;
use crate::cli::OutputFormat;

/// Format search results for output.
pub fn format_search_results(hits: &[SearchHit], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_search_json(hits),
        OutputFormat::Files => print_search_files(hits),
        OutputFormat::Cli => print_search_cli(hits),
    }
}

fn print_search_json(hits: &[SearchHit]) {
    println!(
        "{}",
        serde_json::to_string_pretty(hits).unwrap_or_default()
    );
}

fn print_search_files(hits: &[SearchHit]) {
    for hit in hits {
        println!("{}", hit.path);
    }
}

fn print_search_cli(hits: &[SearchHit]) {
    for hit in hits {
        println!(
            "{} {} {} {}",
            format!("{:>3}", hit.score).cyan(),
            format!("{:<14}", hit.doc_set).green(),
            hit.name,
            hit.path.dimmed()
        );
    }
}

/// Print the available documentation sets.
pub fn format_doc_sets(sets: &[String]) {
    println!("{}", "Available documentation sets:".bold());
    for set in sets {
        println!("  {}", set.green());
    }
}
