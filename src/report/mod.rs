//! HTML Reports
//!
//! Pure renderers over `ProcessOutcome` data: one report per document
//! (applied fixes + diff) and an index summarizing the whole run.

pub mod diff;

pub use diff::{generate_diff_html, DEFAULT_HIGHLIGHT_COLOR};

use crate::models::ProcessOutcome;
use crate::{Context, Result};
use diff::escape_html;
use std::path::{Path, PathBuf};

fn safe_filename(name: &str) -> String {
    name.replace(' ', "_")
}

/// Write the HTML report for one processed document. Returns the report
/// path.
pub fn write_file_report(output_dir: &Path, outcome: &ProcessOutcome) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let stem = outcome
        .original_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("no file stem: {}", outcome.original_path.display()))?;
    let report_path = output_dir.join(format!("{}.html", safe_filename(&stem)));

    let fix = &outcome.fix_result;
    let actions_html = if fix.actions.is_empty() {
        "<p>No fixes applied.</p>".to_string()
    } else {
        let items: String = fix
            .actions
            .iter()
            .map(|a| format!("<li>{}</li>", escape_html(&a.description)))
            .collect();
        format!("<ul>{}</ul>", items)
    };

    let issues_html = if outcome.issues.is_empty() {
        String::new()
    } else {
        let items: String = outcome
            .issues
            .iter()
            .map(|i| format!("<li>{}</li>", escape_html(&i.to_string())))
            .collect();
        format!("\n    <h2>Remaining Issues</h2>\n    <ul>{}</ul>", items)
    };

    let diff_html = generate_diff_html(&fix.original, &fix.fixed, DEFAULT_HIGHLIGHT_COLOR);
    let name = outcome
        .original_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| stem.clone());

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Draft Report - {name}</title>
</head>
<body>
    <h1>{name}</h1>
    <p>Status: {status}, attempts: {attempts}</p>

    <h2>Applied Fixes</h2>
    {actions}{issues}

    <h2>Diff</h2>
    {diff}
</body>
</html>
"#,
        name = escape_html(&name),
        status = outcome.status.as_str(),
        attempts = outcome.attempts,
        actions = actions_html,
        issues = issues_html,
        diff = diff_html,
    );

    std::fs::write(&report_path, html)?;
    Ok(report_path)
}

/// Write the index summarizing every document's status. Returns the index
/// path.
pub fn write_index_report(
    output_dir: &Path,
    reports: &[PathBuf],
    outcomes: &[ProcessOutcome],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let mut rows = String::new();
    for (report_path, outcome) in reports.iter().zip(outcomes) {
        let name = outcome
            .original_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let link = report_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        rows.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href='{}'>View</a></td></tr>\n",
            escape_html(&name),
            outcome.status.as_str(),
            outcome.attempts,
            outcome.fix_result.actions.len(),
            escape_html(&link),
        ));
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Draft Reports Index</title>
</head>
<body>
    <h1>Draft Reports</h1>

    <table border="1" cellpadding="4" cellspacing="0">
        <tr>
            <th>File</th>
            <th>Status</th>
            <th>Attempts</th>
            <th>Fixes</th>
            <th>Report</th>
        </tr>
{}    </table>
</body>
</html>
"#,
        rows
    );

    let index_path = output_dir.join("index.html");
    std::fs::write(&index_path, html)?;
    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixer::{FixAction, FixResult};
    use crate::models::ProcessStatus;
    use tempfile::TempDir;

    fn outcome(name: &str, status: ProcessStatus) -> ProcessOutcome {
        ProcessOutcome {
            original_path: PathBuf::from(name),
            final_path: PathBuf::from(name),
            status,
            attempts: 2,
            issues: Vec::new(),
            fix_result: FixResult {
                path: PathBuf::from(name),
                original: "old\n".to_string(),
                fixed: "new\n".to_string(),
                actions: vec![FixAction::new("Added missing space after ':' in front matter")],
            },
        }
    }

    #[test]
    fn test_file_report_written() {
        let tmp = TempDir::new().unwrap();
        let o = outcome("my draft.md", ProcessStatus::Ready);
        let path = write_file_report(tmp.path(), &o).unwrap();

        assert_eq!(path.file_name().unwrap(), "my_draft.html");
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Status: ready, attempts: 2"));
        assert!(html.contains("Added missing space"));
        assert!(html.contains("diff_add"));
    }

    #[test]
    fn test_index_report_rows() {
        let tmp = TempDir::new().unwrap();
        let outcomes = vec![
            outcome("a.md", ProcessStatus::Ready),
            outcome("b.md", ProcessStatus::Rejected),
        ];
        let reports: Vec<PathBuf> = outcomes
            .iter()
            .map(|o| write_file_report(tmp.path(), o).unwrap())
            .collect();

        let index = write_index_report(tmp.path(), &reports, &outcomes).unwrap();
        let html = std::fs::read_to_string(&index).unwrap();
        assert!(html.contains("<td>a.md</td><td>ready</td>"));
        assert!(html.contains("<td>b.md</td><td>rejected</td>"));
        assert!(html.contains("href='a.html'"));
    }
}
