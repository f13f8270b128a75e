//! Field selection using glob-style name patterns.
//!
//! Patterns support `*` (any run of characters, including empty) and `?`
//! (exactly one character). Matching is case-sensitive and covers the
//! whole field name, not a substring.

use serde_json::{Map, Value};

/// Select field names from `record` that match at least one pattern.
///
/// An empty pattern list selects every field. Field order follows the
/// record's natural iteration order, and each name appears at most once
/// even when multiple patterns match it.
pub fn select_fields(record: &Map<String, Value>, patterns: &[String]) -> Vec<String> {
    if patterns.is_empty() {
        return record.keys().cloned().collect();
    }

    record
        .keys()
        .filter(|key| patterns.iter().any(|p| glob_match(p, key)))
        .cloned()
        .collect()
}

/// Match `name` against a glob `pattern` over full string length.
///
/// Iterative matcher with single-star backtracking: when a `*` is seen we
/// remember its position and retry from there, consuming one more input
/// character each time a later literal or `?` fails.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = name.chars().collect();

    let mut p = 0;
    let mut t = 0;
    let mut star: Option<usize> = None;
    let mut star_t = 0;

    while t < txt.len() {
        if p < pat.len() && (pat[p] == '?' || pat[p] == txt[t]) {
            p += 1;
            t += 1;
        } else if p < pat.len() && pat[p] == '*' {
            star = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star {
            // Backtrack: let the star swallow one more character.
            p = sp + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    // Only trailing stars may remain in the pattern.
    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }
    p == pat.len()
}
