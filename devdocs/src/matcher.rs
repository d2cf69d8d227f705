//! Fuzzy string matching with weighted-ratio scoring.
//!
//! Scores combine whole-string similarity with token-sort and token-set
//! similarity into an integer on a 0-100 scale, 100 meaning an exact
//! match after case folding and tokenization. Candidate ranking is
//! stable: ties keep the input order.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Weight applied to the token-based ratios.
const TOKEN_WEIGHT: f64 = 0.95;

/// Lowercase a string and collapse every non-alphanumeric run into a
/// single space.
fn full_process(s: &str) -> String {
    let mut cleaned = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whole-string similarity on already-processed input, 0.0-100.0.
fn simple_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Similarity of the two inputs with their tokens sorted.
fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let sorted = |s: &str| {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    };
    simple_ratio(&sorted(a), &sorted(b))
}

/// Token-set similarity: compares the shared tokens against each side's
/// full sorted token set, taking the best pairwise ratio.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let join = |set: Vec<&&str>| {
        set.iter()
            .map(|s| **s)
            .collect::<Vec<&str>>()
            .join(" ")
    };
    let intersection = join(tokens_a.intersection(&tokens_b).collect());
    let only_a = join(tokens_a.difference(&tokens_b).collect());
    let only_b = join(tokens_b.difference(&tokens_a).collect());

    let combine = |rest: &str| {
        if intersection.is_empty() {
            rest.to_string()
        } else if rest.is_empty() {
            intersection.clone()
        } else {
            format!("{intersection} {rest}")
        }
    };
    let combined_a = combine(&only_a);
    let combined_b = combine(&only_b);

    simple_ratio(&intersection, &combined_a)
        .max(simple_ratio(&intersection, &combined_b))
        .max(simple_ratio(&combined_a, &combined_b))
}

/// Weighted-ratio similarity between a query and a candidate, 0-100.
pub fn wratio(query: &str, candidate: &str) -> u32 {
    let q = full_process(query);
    let c = full_process(candidate);
    if q.is_empty() || c.is_empty() {
        return 0;
    }

    let score = simple_ratio(&q, &c)
        .max(token_sort_ratio(&q, &c) * TOKEN_WEIGHT)
        .max(token_set_ratio(&q, &c) * TOKEN_WEIGHT);
    score.round().clamp(0.0, 100.0) as u32
}

/// Rank candidates against a query, best first.
///
/// Returns up to `limit` `(candidate, score)` pairs; ties keep the
/// candidates' input order.
pub fn extract<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(&str, u32)> = candidates
        .into_iter()
        .map(|candidate| (candidate, wratio(query, candidate)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}

/// The single best-scoring candidate, or `None` for an empty list.
///
/// On a tie the first candidate wins.
pub fn extract_one<'a, I>(query: &str, candidates: I) -> Option<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, u32)> = None;
    for candidate in candidates {
        let score = wratio(query, candidate);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best
}
