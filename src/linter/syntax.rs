//! Header Syntax Checker
//!
//! Line-oriented pattern checks over the raw front-matter block, run before
//! any structured parsing so that a malformed header still produces precise,
//! per-line diagnostics. Builds the human-readable `pretty_lines` trace as a
//! side effect.

use crate::models::{IssueKind, LintIssue};
use regex::Regex;
use std::sync::OnceLock;

/// Outcome of the syntax pass: issues plus the per-line trace.
#[derive(Debug, Default)]
pub struct SyntaxCheck {
    pub issues: Vec<LintIssue>,
    pub pretty_lines: Vec<String>,
}

fn colon_no_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9_]+):(\S)").unwrap())
}

fn inner_colon_unquoted_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^[A-Za-z0-9_]+:\s*[^"\n]*:[^"\n]*$"#).unwrap())
}

fn missing_close_quote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^[A-Za-z0-9_]+:\s*"[^"\n]*$"#).unwrap())
}

fn missing_open_quote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^[A-Za-z0-9_]+:\s+[^"\s].*"$"#).unwrap())
}

/// Shorten a long line for the trace: first three words, an ellipsis, last
/// three words. Lines of six words or fewer pass through unchanged.
fn shorten_line(line: &str) -> String {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() <= 6 {
        return line.to_string();
    }
    format!(
        "{} ... {}",
        words[..3].join(" "),
        words[words.len() - 3..].join(" ")
    )
}

/// Classify one stripped line. Returns `(code, message, column)` for the
/// first matching rule, checked in precedence order.
fn classify(stripped: &str) -> Option<(&'static str, &'static str, usize)> {
    if let Some(caps) = colon_no_space_re().captures(stripped) {
        // Column of the value's first character
        let column = caps.get(2).map(|m| m.start() + 1).unwrap_or(1);
        return Some(("E_FM_SPACE", "missing space after ':'", column));
    }
    if inner_colon_unquoted_re().is_match(stripped) {
        let column = stripped.find(':').map(|i| i + 1).unwrap_or(1);
        return Some((
            "E_FM_QUOTE_COLON",
            "value contains ':' and must be quoted",
            column,
        ));
    }
    if missing_close_quote_re().is_match(stripped) {
        return Some((
            "E_FM_QUOTE_CLOSE",
            "missing \" at the end of line",
            stripped.chars().count() + 1,
        ));
    }
    if missing_open_quote_re().is_match(stripped) {
        // Position right after the key and colon+space
        let key_len = stripped.split(':').next().map(|k| k.len()).unwrap_or(0);
        return Some((
            "E_FM_QUOTE_OPEN",
            "missing \" at the beginning of value",
            key_len + 2,
        ));
    }
    None
}

/// Run the syntax pass over the raw front-matter lines (the content between
/// the delimiters, exclusive). Line numbers are 1-based within the block;
/// blank lines are skipped entirely and do not appear in the trace.
pub fn check(fm_lines: &[&str]) -> SyntaxCheck {
    let mut result = SyntaxCheck::default();
    result.pretty_lines.push("START\t\t---".to_string());

    for (idx, raw) in fm_lines.iter().enumerate() {
        let raw = raw.trim_end_matches('\n').trim_end_matches('\r');
        let stripped = raw.trim();
        if stripped.is_empty() {
            continue;
        }

        match classify(stripped) {
            Some((code, message, column)) => {
                let err_no = result.issues.len() + 1;
                result
                    .pretty_lines
                    .push(format!("ERROR {:02}\t{}", err_no, shorten_line(raw)));
                result.issues.push(LintIssue::new(
                    IssueKind::HeaderSyntax,
                    code,
                    message,
                    Some(idx + 1),
                    Some(column),
                ));
            }
            None => {
                result.pretty_lines.push(format!("OK\t\t{}", raw));
            }
        }
    }

    result.pretty_lines.push("END\t---".to_string());
    result
}
