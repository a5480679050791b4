//! Lint Diagnostics Model
//!
//! Defines the structured findings produced by one lint pass:
//! - `LintIssue` - a single diagnostic with kind, code, and position
//! - `LintReport` - the complete, canonically ordered result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Line-oriented header syntax error, found before structured parsing
    HeaderSyntax,
    /// Header parsed (or failed to parse) at the structured level
    HeaderSemantic,
    /// Document body heading sequence mismatch
    Sections,
}

impl IssueKind {
    /// Stable tag used in rendered issue strings and sidecar metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::HeaderSyntax => "header_syntax",
            IssueKind::HeaderSemantic => "header_semantic",
            IssueKind::Sections => "sections",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic finding about a document.
///
/// `line` and `column` are 1-based within the front-matter block and absent
/// for findings that are not line-scoped (semantic and section issues).
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    pub kind: IssueKind,
    pub code: Option<String>,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl LintIssue {
    pub fn new(
        kind: IssueKind,
        code: impl Into<String>,
        message: impl Into<String>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Self {
        Self {
            kind,
            code: Some(code.into()),
            message: message.into(),
            line,
            column,
        }
    }

    /// Unscoped issue (no line/column), the common case for semantic and
    /// section findings.
    pub fn unscoped(kind: IssueKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(kind, code, message, None, None)
    }

    /// Sort key implementing the canonical report order: unscoped lines
    /// sort before scoped ones via a -1 sentinel, then column the same way,
    /// then code, then message.
    fn sort_key(&self) -> (i64, i64, &str, &str) {
        (
            self.line.map(|l| l as i64).unwrap_or(-1),
            self.column.map(|c| c as i64).unwrap_or(-1),
            self.code.as_deref().unwrap_or(""),
            &self.message,
        )
    }
}

impl fmt::Display for LintIssue {
    /// Renders `<kind> [<code>] at <line>:<column> - <message>` with `-`
    /// standing in for absent fields. This exact string is what the rewrite
    /// service receives.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        let column = self
            .column
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} [{}] at {}:{} - {}",
            self.kind,
            self.code.as_deref().unwrap_or("-"),
            line,
            column,
            self.message
        )
    }
}

/// Result of one lint pass over one document snapshot.
///
/// `ok` is true iff `issues` is empty. `pretty_lines` carries the
/// human-readable syntax-check trace and is populated only when syntax
/// checking ran and found at least one error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintReport {
    pub ok: bool,
    pub issues: Vec<LintIssue>,
    pub pretty_lines: Vec<String>,
}

impl LintReport {
    /// A clean report: no issues, no trace.
    pub fn clean() -> Self {
        Self {
            ok: true,
            issues: Vec::new(),
            pretty_lines: Vec::new(),
        }
    }

    pub fn with_issues(issues: Vec<LintIssue>, pretty_lines: Vec<String>) -> Self {
        Self {
            ok: issues.is_empty(),
            issues,
            pretty_lines,
        }
    }

    /// Issues in canonical order, regardless of insertion order.
    pub fn sorted_issues(&self) -> Vec<LintIssue> {
        let mut sorted = self.issues.clone();
        sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        sorted
    }

    /// Re-sort `issues` in place into canonical order. Called once by the
    /// engine before a report is returned; reports are not mutated after.
    pub fn canonicalize(&mut self) {
        self.issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }

    /// Rendered issue strings, in canonical order.
    pub fn issue_strings(&self) -> Vec<String> {
        self.sorted_issues().iter().map(|i| i.to_string()).collect()
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ok={}", self.ok)?;
        for issue in self.sorted_issues() {
            let line = issue
                .line
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string());
            let column = issue
                .column
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{}|{}|{}:{}|{}",
                issue.kind,
                issue.code.as_deref().unwrap_or("-"),
                line,
                column,
                issue.message
            )?;
        }
        if !self.pretty_lines.is_empty() {
            writeln!(f, "pretty:")?;
            for line in &self.pretty_lines {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(line: Option<usize>, column: Option<usize>, code: &str, message: &str) -> LintIssue {
        LintIssue::new(IssueKind::HeaderSyntax, code, message, line, column)
    }

    #[test]
    fn test_sorted_issues_unscoped_first() {
        let report = LintReport::with_issues(
            vec![
                issue(Some(3), Some(1), "E_FM_SPACE", "c"),
                issue(None, None, "E_FM_YAML", "a"),
                issue(Some(1), Some(8), "E_FM_SPACE", "b"),
            ],
            Vec::new(),
        );

        let sorted = report.sorted_issues();
        assert_eq!(sorted[0].line, None);
        assert_eq!(sorted[1].line, Some(1));
        assert_eq!(sorted[2].line, Some(3));
    }

    #[test]
    fn test_sorted_issues_stable_under_permutation() {
        let a = issue(Some(2), Some(4), "E_FM_QUOTE_CLOSE", "x");
        let b = issue(Some(2), Some(4), "E_FM_QUOTE_OPEN", "y");
        let c = issue(None, None, "E_SEC_ORDER", "z");

        let forward = LintReport::with_issues(vec![a.clone(), b.clone(), c.clone()], Vec::new());
        let backward = LintReport::with_issues(vec![c, b, a], Vec::new());

        assert_eq!(forward.sorted_issues(), backward.sorted_issues());
    }

    #[test]
    fn test_issue_display_scoped() {
        let i = issue(Some(1), Some(8), "E_FM_SPACE", "missing space after ':'");
        assert_eq!(
            i.to_string(),
            "header_syntax [E_FM_SPACE] at 1:8 - missing space after ':'"
        );
    }

    #[test]
    fn test_issue_display_unscoped() {
        let i = LintIssue::unscoped(
            IssueKind::HeaderSemantic,
            "E_FM_REQUIRED_FIELD",
            "Missing required field 'description'",
        );
        assert_eq!(
            i.to_string(),
            "header_semantic [E_FM_REQUIRED_FIELD] at -:- - Missing required field 'description'"
        );
    }

    #[test]
    fn test_report_display_includes_pretty_block() {
        let report = LintReport::with_issues(
            vec![issue(Some(1), Some(8), "E_FM_SPACE", "m")],
            vec!["START\t\t---".to_string(), "END\t---".to_string()],
        );
        let rendered = report.to_string();
        assert!(rendered.starts_with("ok=false\n"));
        assert!(rendered.contains("header_syntax|E_FM_SPACE|1:8|m"));
        assert!(rendered.contains("pretty:\nSTART"));
    }
}
