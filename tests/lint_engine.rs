//! End-to-end lint engine behavior over whole documents.

use draftd::models::IssueKind;
use draftd::parser::ParserKind;
use draftd::LintEngine;

const VALID_BODY: &str = "## מצרכים\n- a\n## אופן ההכנה\n- b\n## ערכים תזונתיים (הערכה ל-100 גרם)\n- n\n### ויטמינים ומינרלים בולטים\n- v\n## הערות\n- h\n";

fn valid_doc() -> String {
    format!(
        "---\nlayout: recipe\ntitle: \"t\"\ncategory: Main\ndescription: \"d\"\n---\n{}",
        VALID_BODY
    )
}

#[test]
fn fully_valid_document_is_clean() {
    let engine = LintEngine::default();
    let report = engine.lint_text(&valid_doc());

    assert!(report.ok);
    assert!(report.issues.is_empty());
    assert!(report.pretty_lines.is_empty());
}

#[test]
fn linting_clean_input_twice_is_idempotent() {
    let engine = LintEngine::default();
    let doc = valid_doc();

    for _ in 0..2 {
        let report = engine.lint_text(&doc);
        assert!(report.ok);
        assert!(report.issues.is_empty());
    }
}

#[test]
fn missing_space_after_colon_at_line_one_column_eight() {
    let engine = LintEngine::default();
    let doc = format!(
        "---\nlayout:recipe\ntitle: \"t\"\ncategory: Main\ndescription: \"d\"\n---\n{}",
        VALID_BODY
    );
    let report = engine.lint_text(&doc);

    assert!(!report.ok);
    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, IssueKind::HeaderSyntax);
    assert_eq!(issue.message, "missing space after ':'");
    assert_eq!(issue.line, Some(1));
    assert_eq!(issue.column, Some(8));
}

#[test]
fn syntax_error_produces_trace_and_skips_later_checks() {
    let engine = LintEngine::default();
    // Missing description and broken sections would both fire if the
    // syntax pass did not short-circuit.
    let doc = "---\nlayout:recipe\n---\nwrong body\n";
    let report = engine.lint_text(doc);

    assert!(!report.ok);
    assert!(report
        .issues
        .iter()
        .all(|i| i.kind == IssueKind::HeaderSyntax));
    assert_eq!(report.pretty_lines.first().map(String::as_str), Some("START\t\t---"));
    assert_eq!(report.pretty_lines.last().map(String::as_str), Some("END\t---"));
    assert!(report.pretty_lines.iter().any(|l| l.starts_with("ERROR 01\t")));
}

#[test]
fn missing_description_yields_single_required_field_issue() {
    let engine = LintEngine::default();
    let doc = format!(
        "---\nlayout: recipe\ntitle: \"t\"\ncategory: Main\n---\n{}",
        VALID_BODY
    );
    let report = engine.lint_text(&doc);

    assert!(!report.ok);
    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, IssueKind::HeaderSemantic);
    assert_eq!(issue.code.as_deref(), Some("E_FM_REQUIRED_FIELD"));
    assert_eq!(issue.message, "Missing required field 'description'");
}

#[test]
fn swapped_sections_yield_exactly_three_issues_with_literal_lists() {
    let engine = LintEngine::default();
    let swapped_body = "## אופן ההכנה\n- b\n## מצרכים\n- a\n## ערכים תזונתיים (הערכה ל-100 גרם)\n- n\n### ויטמינים ומינרלים בולטים\n- v\n## הערות\n- h\n";
    let doc = format!(
        "---\nlayout: recipe\ntitle: \"t\"\ncategory: Main\ndescription: \"d\"\n---\n{}",
        swapped_body
    );
    let report = engine.lint_text(&doc);

    assert!(!report.ok);
    assert_eq!(report.issues.len(), 3);
    assert!(report.issues.iter().all(|i| i.kind == IssueKind::Sections));

    // Canonical order sorts unscoped issues by code
    let sorted = report.sorted_issues();
    assert!(sorted[0]
        .message
        .starts_with("Expected: [\"## מצרכים\", \"## אופן ההכנה\""));
    assert!(sorted[1]
        .message
        .starts_with("Found:    [\"## אופן ההכנה\", \"## מצרכים\""));
    assert_eq!(sorted[2].message, "Invalid section order");
}

#[test]
fn canonical_order_is_insertion_independent() {
    let engine = LintEngine::default();
    // Two documents with the same issues introduced in different line
    // order must sort identically by (line, column, code, message).
    let doc = "---\nlayout:recipe\ntitle: \"broken\ncategory: Main\n---\nbody\n";
    let report = engine.lint_text(doc);

    let sorted = report.sorted_issues();
    let mut resorted = sorted.clone();
    resorted.reverse();

    let report_reversed = draftd::models::LintReport::with_issues(resorted, Vec::new());
    assert_eq!(report_reversed.sorted_issues(), sorted);
}

#[test]
fn headerless_document_is_never_flagged() {
    let engine = LintEngine::default();
    for doc in ["# plain markdown\n\ntext\n", "", "just text"] {
        let report = engine.lint_text(doc);
        assert!(report.ok, "doc {:?} should pass", doc);
    }
}

#[test]
fn unclosed_header_is_treated_as_headerless() {
    let engine = LintEngine::default();
    let report = engine.lint_text("---\nlayout: recipe\ntitle: \"t\"\n");
    assert!(report.ok);
    assert!(report.issues.is_empty());
}

#[test]
fn unknown_field_suggestion_appears_in_report() {
    let engine = LintEngine::default();
    let doc = format!(
        "---\nlayout: recipe\ntitle: \"t\"\ncatagory: Main\ndescription: \"d\"\n---\n{}",
        VALID_BODY
    );
    let report = engine.lint_text(&doc);

    let unknown: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.code.as_deref() == Some("E_FM_UNKNOWN_FIELD"))
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(
        unknown[0].message,
        "Unknown field 'catagory', did you mean 'category'?"
    );
}

#[test]
fn basic_parser_strategy_accepts_valid_document() {
    let engine = LintEngine::new(ParserKind::Basic);
    let report = engine.lint_text(&valid_doc());
    assert!(report.ok, "issues: {:?}", report.issues);
}

#[test]
fn rendered_issue_strings_use_canonical_format() {
    let engine = LintEngine::default();
    let doc = format!(
        "---\nlayout:recipe\ntitle: \"t\"\ncategory: Main\ndescription: \"d\"\n---\n{}",
        VALID_BODY
    );
    let report = engine.lint_text(&doc);
    assert_eq!(
        report.issue_strings(),
        vec!["header_syntax [E_FM_SPACE] at 1:8 - missing space after ':'"]
    );
}
