//! Header Schema Validator
//!
//! Checks the parsed front-matter mapping for required fields and flags
//! unrecognized keys, suggesting the closest known field name when a
//! ratio-based similarity match clears the acceptance threshold.

use crate::models::{IssueKind, LintIssue};
use serde_yaml::Value;

/// Fields every recipe header must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["layout", "title", "category", "description"];

/// Full allowlist: required fields plus the optional metadata the site
/// templates understand.
pub const KNOWN_FIELDS: [&str; 13] = [
    "layout",
    "title",
    "category",
    "description",
    "type",
    "origin",
    "spiciness",
    "diabetic_friendly",
    "image",
    "source",
    "notes",
    "author",
    "yield",
];

/// Minimum similarity ratio for a "did you mean" suggestion.
const SUGGESTION_CUTOFF: f64 = 0.6;

/// Length of the longest common subsequence of two character sequences.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    if m == 0 || n == 0 {
        return 0;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i][j - 1].max(dp[i - 1][j]);
            }
        }
    }
    dp[m][n]
}

/// Similarity ratio in [0, 1]: `2 * LCS / (|a| + |b|)`.
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    2.0 * lcs_len(&a, &b) as f64 / (a.len() + b.len()) as f64
}

/// Single best candidate from `candidates` whose similarity to `key`
/// clears the cutoff, or None.
pub fn close_match<'a>(key: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for &candidate in candidates {
        let ratio = similarity(key, candidate);
        if ratio >= SUGGESTION_CUTOFF && best.map_or(true, |(_, r)| ratio > r) {
            best = Some((candidate, ratio));
        }
    }
    best.map(|(c, _)| c)
}

/// Render a mapping key for diagnostics. Non-string scalar keys (numbers,
/// booleans) are rendered in their YAML form.
fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Validate the parsed header mapping. Emits `E_FM_REQUIRED_FIELD` for each
/// missing required field and `E_FM_UNKNOWN_FIELD` for each key outside the
/// allowlist, in mapping insertion order.
pub fn check(front: &serde_yaml::Mapping) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    for key in REQUIRED_FIELDS {
        if !front.contains_key(key) {
            issues.push(LintIssue::unscoped(
                IssueKind::HeaderSemantic,
                "E_FM_REQUIRED_FIELD",
                format!("Missing required field '{}'", key),
            ));
        }
    }

    for key in front.keys() {
        let Some(name) = key_to_string(key) else {
            continue;
        };
        if KNOWN_FIELDS.contains(&name.as_str()) {
            continue;
        }
        let mut message = format!("Unknown field '{}'", name);
        if let Some(suggestion) = close_match(&name, &KNOWN_FIELDS) {
            message.push_str(&format!(", did you mean '{}'?", suggestion));
        }
        issues.push(LintIssue::unscoped(
            IssueKind::HeaderSemantic,
            "E_FM_UNKNOWN_FIELD",
            message,
        ));
    }

    issues
}
