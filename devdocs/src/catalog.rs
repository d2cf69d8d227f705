//! Documentation catalog: entry discovery, fuzzy search, and reads.
//!
//! The catalog scans the docs root once, lazily, and answers every
//! query from the in-memory index until it is invalidated. It targets
//! one caller at a time; a concurrent host must serialize access.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::config::{
    CANDIDATE_HEADROOM, DOC_EXTENSION, READ_SCORE_CUTOFF, SEARCH_SCORE_CUTOFF, SET_NAME_BOOST,
    resolve_docs_dir,
};
use crate::{convert, matcher};

/// One documentation file discovered under the docs root.
#[derive(Debug, Clone)]
pub struct DocEntry {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the docs root.
    pub rel_path: String,
    /// File stem as stored on disk.
    pub stem: String,
    /// Name of the owning documentation set.
    pub doc_set: String,
}

/// A single search match.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Path relative to the docs root, usable with the read operation.
    pub path: String,
    /// Matched display name (normalized stem).
    pub name: String,
    /// Match score; 0-100 before the doc-set boost.
    pub score: u32,
    /// Name of the owning documentation set.
    pub doc_set: String,
}

/// Lazily built index structures.
#[derive(Debug, Default)]
struct CatalogCache {
    /// Every entry, in discovery order.
    entries: Vec<DocEntry>,
    /// Entry indices per documentation set.
    by_set: HashMap<String, Vec<usize>>,
}

/// Replace every dot in a name with a space.
///
/// DevDocs entries are often prefixed with type tags joined by dots
/// ("method.push"); spacing them out lets the matcher score them the
/// way a human query reads.
pub fn normalize_stem(name: &str) -> String {
    name.replace('.', " ")
}

/// In-memory index over a DevDocs documentation tree.
#[derive(Debug)]
pub struct DocsCatalog {
    /// Root directory of the documentation tree.
    root: PathBuf,
    /// Lazily populated index; `None` until the first search or read.
    cache: Option<CatalogCache>,
}

impl DocsCatalog {
    /// Create a catalog over `docs_dir`, or over the first conventional
    /// docs location when no directory is given.
    pub fn new(docs_dir: Option<&Path>) -> Self {
        Self {
            root: resolve_docs_dir(docs_dir),
            cache: None,
        }
    }

    /// The resolved docs root. May not exist; a missing root behaves as
    /// an empty corpus.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List documentation set names, sorted. Empty for a missing root.
    pub fn list_sets(&self) -> Vec<String> {
        let Ok(dir) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut sets: Vec<String> = dir
            .filter_map(Result::ok)
            .filter(|item| item.path().is_dir())
            .filter_map(|item| item.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .collect();
        sets.sort();
        sets
    }

    /// Drop the cached index so the next operation rescans the tree.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Build the index on first use. Idempotent: once built (even over
    /// a missing root) nothing is rescanned until `invalidate`.
    fn build_cache(&mut self) {
        if self.cache.is_some() {
            return;
        }

        let mut cache = CatalogCache::default();
        for set in self.list_sets() {
            let set_dir = self.root.join(&set);
            let files = WalkDir::new(&set_dir)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .filter(|item| item.file_type().is_file())
                .filter(|item| {
                    item.path()
                        .extension()
                        .is_some_and(|ext| ext == DOC_EXTENSION)
                });

            for file in files {
                let path = file.path();
                let rel_path = path
                    .strip_prefix(&self.root)
                    .unwrap_or(path)
                    .to_string_lossy()
                    .into_owned();
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let idx = cache.entries.len();
                cache.by_set.entry(set.clone()).or_default().push(idx);
                cache.entries.push(DocEntry {
                    path: path.to_path_buf(),
                    rel_path,
                    stem,
                    doc_set: set.clone(),
                });
            }
        }
        self.cache = Some(cache);
    }

    /// Fuzzy-search entry names.
    ///
    /// Entries are grouped by normalized stem before matching, so the
    /// same name appearing in several sets is scored once and every
    /// underlying file is reported. When the query mentions a set name
    /// as a word and no `doc_set` filter is given, hits from that set
    /// get a flat score boost. An unknown `doc_set` yields no results.
    pub fn search(&mut self, query: &str, doc_set: Option<&str>, limit: usize) -> Vec<SearchHit> {
        if limit == 0 {
            return Vec::new();
        }
        self.build_cache();
        let Some(cache) = &self.cache else {
            return Vec::new();
        };

        let pool: Vec<usize> = match doc_set {
            Some(name) => cache.by_set.get(name).cloned().unwrap_or_default(),
            None => (0..cache.entries.len()).collect(),
        };

        // Group the pool by normalized key, keeping first-seen order so
        // ranking stays stable.
        let mut keys: Vec<String> = Vec::new();
        let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
        for &idx in &pool {
            let key = normalize_stem(&cache.entries[idx].stem);
            let slot = by_key.entry(key.clone()).or_default();
            if slot.is_empty() {
                keys.push(key);
            }
            slot.push(idx);
        }

        // Extra headroom over distinct keys, since one key can expand
        // back into several files.
        let headroom = limit.saturating_mul(CANDIDATE_HEADROOM);
        let matches = matcher::extract(query, keys.iter().map(String::as_str), headroom);

        let mut hits: Vec<SearchHit> = Vec::new();
        for (key, score) in matches {
            if score <= SEARCH_SCORE_CUTOFF {
                continue;
            }
            for &idx in &by_key[key] {
                let entry = &cache.entries[idx];
                let boosted = if doc_set.is_none() && query_mentions_set(query, &entry.doc_set) {
                    score + SET_NAME_BOOST
                } else {
                    score
                };
                hits.push(SearchHit {
                    path: entry.rel_path.clone(),
                    name: key.to_string(),
                    score: boosted,
                    doc_set: entry.doc_set.clone(),
                });
            }
        }

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);
        hits
    }

    /// Read a documentation file as Markdown.
    ///
    /// `path` is relative to the docs root. When it does not name an
    /// existing file and `fuzzy` is enabled, the closest entry by
    /// normalized relative path is used instead, provided it clears the
    /// read cutoff. Missing files, undecodable content, and conversion
    /// problems all come back as `None`; read never panics.
    pub fn read(&mut self, path: &str, fuzzy: bool) -> Option<String> {
        let mut candidate = self.root.join(path);

        if !candidate.is_file() {
            if !fuzzy || !self.root.is_dir() {
                return None;
            }
            self.build_cache();
            let cache = self.cache.as_ref()?;
            if cache.entries.is_empty() {
                return None;
            }

            let keys: Vec<String> = cache
                .entries
                .iter()
                .map(|entry| normalize_stem(&entry.rel_path))
                .collect();
            let (best, score) =
                matcher::extract_one(&normalize_stem(path), keys.iter().map(String::as_str))?;
            if score <= READ_SCORE_CUTOFF {
                return None;
            }
            let pos = keys.iter().position(|key| key == best)?;
            candidate = cache.entries[pos].path.clone();
        }

        if !candidate.is_file() {
            return None;
        }

        let html = match fs::read_to_string(&candidate) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(path = %candidate.display(), %err, "failed to read documentation file");
                return None;
            }
        };
        Some(convert::html_to_markdown(&html))
    }
}

/// True when `set` appears as a whole word of `query`, ignoring case.
fn query_mentions_set(query: &str, set: &str) -> bool {
    query
        .split_whitespace()
        .any(|word| word.eq_ignore_ascii_case(set))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_stem_replaces_dots() {
        assert_eq!(normalize_stem("method.push"), "method push");
        assert_eq!(normalize_stem("fn.vec.push"), "fn vec push");
        assert_eq!(normalize_stem("index"), "index");
    }

    #[test]
    fn query_mentions_set_is_word_based() {
        assert!(query_mentions_set("rust vec", "rust"));
        assert!(query_mentions_set("Rust vec", "rust"));
        assert!(!query_mentions_set("rusty vec", "rust"));
    }
}
