//! Configuration constants and docs-root resolution.

use std::path::{Path, PathBuf};

/// Environment variable overriding the docs root directory.
pub const DOCS_DIR_ENV: &str = "DEVDOCS_DOCS_DIR";

/// File extension of documentation entries.
pub const DOC_EXTENSION: &str = "html";

/// Minimum score (exclusive) for a search match to be reported.
pub const SEARCH_SCORE_CUTOFF: u32 = 60;

/// Minimum score (exclusive) for the read fallback to adopt a file.
pub const READ_SCORE_CUTOFF: u32 = 70;

/// Flat bonus applied when the query names the entry's doc set.
pub const SET_NAME_BOOST: u32 = 15;

/// Multiplier on the result limit when matching distinct keys, so that
/// expanding a key back to its files does not starve the final list.
pub const CANDIDATE_HEADROOM: usize = 10;

/// Default maximum number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// CSS selector matching navigational chrome stripped before conversion.
pub const CHROME_SELECTOR: &str = "nav, aside, .sidebar, .navigation, .menu";

/// Docker image the documentation bundle is extracted from.
pub const DEFAULT_DOCKER_IMAGE: &str = "ghcr.io/freecodecamp/devdocs";

/// Conventional docs-root locations, probed in priority order.
///
/// The last candidate doubles as the fallback when none exist; callers
/// treat a missing root as an empty corpus.
fn root_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from("docs/docs"),
        PathBuf::from("docs"),
        PathBuf::from("/usr/local/share/devdocs/docs"),
    ];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local/share/devdocs/docs"));
    }
    candidates
}

/// Resolve the docs root directory.
///
/// An explicit path is used verbatim without an existence check.
/// Otherwise the conventional locations are probed in order and the
/// first existing directory wins; if none exist, the lowest-priority
/// candidate is returned anyway.
pub fn resolve_docs_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let candidates = root_candidates();
    for candidate in &candidates {
        if candidate.is_dir() {
            return candidate.clone();
        }
    }
    candidates
        .into_iter()
        .next_back()
        .unwrap_or_else(|| PathBuf::from("docs/docs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins_without_existence_check() {
        let dir = resolve_docs_dir(Some(Path::new("/no/such/place")));
        assert_eq!(dir, PathBuf::from("/no/such/place"));
    }

    #[test]
    fn probe_returns_some_candidate() {
        let dir = resolve_docs_dir(None);
        assert!(!dir.as_os_str().is_empty());
    }
}
