//! Integration tests for the documentation catalog.

use std::fs;
use std::path::Path;

use devdocs::catalog::DocsCatalog;
use tempfile::TempDir;

/// Write a minimal documentation page.
fn write_doc(dir: &Path, name: &str, title: &str, body: &str) {
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <nav>site navigation</nav>\n<h1>{title}</h1>\n<p>{body}</p>\n</body>\n</html>"
    );
    fs::write(dir.join(name), html).expect("write fixture doc");
}

/// Docs tree with one "python" set containing index.html and list.html.
fn python_fixture() -> TempDir {
    let tmp = TempDir::new().expect("create tempdir");
    let python = tmp.path().join("python");
    fs::create_dir_all(&python).expect("create set dir");
    write_doc(
        &python,
        "index.html",
        "Python Documentation",
        "Welcome to Python documentation.",
    );
    write_doc(&python, "list.html", "List", "Python list documentation.");
    tmp
}

#[test]
fn list_sets_returns_sorted_names() {
    let tmp = python_fixture();
    fs::create_dir_all(tmp.path().join("javascript")).expect("create set dir");
    fs::create_dir_all(tmp.path().join(".hidden")).expect("create hidden dir");

    let catalog = DocsCatalog::new(Some(tmp.path()));
    assert_eq!(catalog.list_sets(), vec!["javascript", "python"]);
}

#[test]
fn search_finds_entries() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));

    let hits = catalog.search("list", None, 20);
    assert!(!hits.is_empty());
    assert!(hits.iter().any(|hit| hit.name.contains("list")));
    assert!(hits.iter().all(|hit| hit.score > 60));
}

#[test]
fn search_respects_doc_set_filter() {
    let tmp = python_fixture();
    let javascript = tmp.path().join("javascript");
    fs::create_dir_all(&javascript).expect("create set dir");
    write_doc(&javascript, "list.html", "List", "JS list documentation.");

    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    let hits = catalog.search("list", Some("python"), 20);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|hit| hit.doc_set == "python"));
}

#[test]
fn search_unknown_set_is_empty_not_an_error() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    assert!(catalog.search("list", Some("fortran"), 20).is_empty());
}

#[test]
fn search_zero_limit_yields_nothing() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    assert!(catalog.search("list", None, 0).is_empty());
}

#[test]
fn search_reports_every_file_behind_a_shared_name() {
    let tmp = python_fixture();
    let javascript = tmp.path().join("javascript");
    fs::create_dir_all(&javascript).expect("create set dir");
    write_doc(&javascript, "list.html", "List", "JS list documentation.");

    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    let hits = catalog.search("list", None, 20);

    let mut paths: Vec<&str> = hits.iter().map(|hit| hit.path.as_str()).collect();
    assert!(paths.contains(&"javascript/list.html"));
    assert!(paths.contains(&"python/list.html"));

    // No duplicate paths in one response.
    let total = paths.len();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), total);
}

#[test]
fn search_limit_truncates_across_many_sets() {
    let tmp = TempDir::new().expect("create tempdir");
    for i in 0..15 {
        let set = tmp.path().join(format!("set{i:02}"));
        fs::create_dir_all(&set).expect("create set dir");
        write_doc(&set, "list.html", "List", "list docs");
    }

    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    let hits = catalog.search("list", None, 5);
    assert_eq!(hits.len(), 5);
    assert!(hits.iter().all(|hit| hit.name == "list"));
}

#[test]
fn search_boosts_sets_named_in_the_query() {
    let tmp = TempDir::new().expect("create tempdir");
    for set in ["go", "rust"] {
        let dir = tmp.path().join(set);
        fs::create_dir_all(&dir).expect("create set dir");
        write_doc(&dir, "vec.html", "Vec", "vector docs");
    }

    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    let hits = catalog.search("rust vec", None, 20);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].doc_set, "rust");

    let rust = hits.iter().find(|hit| hit.doc_set == "rust").unwrap();
    let go = hits.iter().find(|hit| hit.doc_set == "go").unwrap();
    assert_eq!(rust.score, go.score + 15);
}

#[test]
fn read_converts_to_markdown() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));

    let content = catalog.read("python/index.html", true).unwrap();
    assert!(content.contains("Python Documentation"));
    assert!(content.contains("Welcome to Python documentation."));
    assert!(!content.contains("site navigation"));
}

#[test]
fn read_falls_back_on_a_typo() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));

    let content = catalog.read("python/indx.html", true).unwrap();
    assert!(content.contains("Python Documentation"));
}

#[test]
fn read_exact_mode_skips_the_fallback() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    assert!(catalog.read("python/indx.html", false).is_none());
}

#[test]
fn read_unknown_path_is_none() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));
    assert!(catalog.read("nonexistent/path.html", true).is_none());
}

#[test]
fn missing_root_degrades_to_empty_results() {
    let mut catalog = DocsCatalog::new(Some(Path::new("/nonexistent/devdocs/path")));
    assert!(catalog.list_sets().is_empty());
    assert!(catalog.search("test", None, 20).is_empty());
    assert!(catalog.read("test.html", true).is_none());
}

#[test]
fn cache_is_sticky_until_invalidated() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));

    assert!(!catalog.search("list", None, 20).is_empty());

    // New files are invisible until the cache is dropped.
    write_doc(
        &tmp.path().join("python"),
        "tuple.html",
        "Tuple",
        "Python tuple documentation.",
    );
    assert!(catalog.search("tuple", None, 20).is_empty());

    catalog.invalidate();
    assert!(!catalog.search("tuple", None, 20).is_empty());
}

#[test]
fn repeated_searches_are_idempotent() {
    let tmp = python_fixture();
    let mut catalog = DocsCatalog::new(Some(tmp.path()));

    let first = catalog.search("list", None, 20);
    let second = catalog.search("list", None, 20);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.path, b.path);
        assert_eq!(a.score, b.score);
    }
}
