//! Extraction of the documentation bundle from the DevDocs Docker image.
//!
//! This is the one write-side operation: it populates a directory tree
//! the catalog later reads, and never touches the catalog itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DevdocsError, Result};

/// Copy the pre-built docs tree out of `image` into `output_dir`.
///
/// Creates a throwaway container, copies `/devdocs/public/docs` from
/// it, and removes the container again even when the copy fails.
/// Returns the extracted docs root (`output_dir/docs`).
pub fn extract_docs(output_dir: &Path, image: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let created = Command::new("docker").args(["create", image]).output()?;
    if !created.status.success() {
        return Err(DevdocsError::Extract(format!(
            "docker create {image}: {}",
            String::from_utf8_lossy(&created.stderr).trim()
        )));
    }
    let container_id = String::from_utf8_lossy(&created.stdout).trim().to_string();
    tracing::debug!(container = %container_id, "created extraction container");

    let source = format!("{container_id}:/devdocs/public/docs");
    let copied = Command::new("docker")
        .args(["cp", &source])
        .arg(output_dir)
        .output();

    // Remove the container before reporting the copy result.
    let removed = Command::new("docker")
        .args(["rm", &container_id])
        .output();
    if let Err(err) = removed {
        tracing::warn!(container = %container_id, %err, "failed to remove extraction container");
    }

    let copied = copied?;
    if !copied.status.success() {
        return Err(DevdocsError::Extract(format!(
            "docker cp from {image}: {}",
            String::from_utf8_lossy(&copied.stderr).trim()
        )));
    }

    Ok(output_dir.join("docs"))
}
