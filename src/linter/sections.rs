//! Document Section Validator
//!
//! The document body must carry exactly the required heading sequence, in
//! order, with no extras and no omissions. The check is line-anchored on
//! purpose: a heading is any line whose stripped form starts with `#`, so
//! the contract stays independent of Markdown rendering subtleties.

use crate::models::{IssueKind, LintIssue};

/// Required body headings, in publication order.
pub const REQUIRED_SECTIONS: [&str; 5] = [
    "## מצרכים",
    "## אופן ההכנה",
    "## ערכים תזונתיים (הערכה ל-100 גרם)",
    "### ויטמינים ומינרלים בולטים",
    "## הערות",
];

/// Every heading line in the body, stripped, in order.
pub fn extract_sections(body_lines: &[&str]) -> Vec<String> {
    body_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| line.starts_with('#'))
        .map(|line| line.to_string())
        .collect()
}

fn render_list(sections: &[String]) -> String {
    format!("{:?}", sections)
}

/// All-or-nothing structural equality against the required sequence. Any
/// mismatch emits exactly three issues carrying the expected and found
/// sequences verbatim.
pub fn check(body_lines: &[&str]) -> Vec<LintIssue> {
    let found = extract_sections(body_lines);
    let expected: Vec<String> = REQUIRED_SECTIONS.iter().map(|s| s.to_string()).collect();

    if found == expected {
        return Vec::new();
    }

    vec![
        LintIssue::unscoped(IssueKind::Sections, "E_SEC_ORDER", "Invalid section order"),
        LintIssue::unscoped(
            IssueKind::Sections,
            "E_SEC_EXPECTED",
            format!("Expected: {}", render_list(&expected)),
        ),
        LintIssue::unscoped(
            IssueKind::Sections,
            "E_SEC_FOUND",
            format!("Found:    {}", render_list(&found)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> Vec<&'static str> {
        vec![
            "## מצרכים",
            "- a",
            "## אופן ההכנה",
            "- b",
            "## ערכים תזונתיים (הערכה ל-100 גרם)",
            "- n",
            "### ויטמינים ומינרלים בולטים",
            "- v",
            "## הערות",
            "- h",
        ]
    }

    #[test]
    fn test_valid_sections() {
        assert!(check(&valid_body()).is_empty());
    }

    #[test]
    fn test_swapped_headings_yield_exactly_three_issues() {
        let mut body = valid_body();
        body.swap(0, 2);
        let issues = check(&body);
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].code.as_deref(), Some("E_SEC_ORDER"));
        assert_eq!(issues[1].code.as_deref(), Some("E_SEC_EXPECTED"));
        assert_eq!(issues[2].code.as_deref(), Some("E_SEC_FOUND"));
        assert!(issues[1].message.contains("## מצרכים"));
        assert!(issues[2].message.starts_with("Found:    "));
    }

    #[test]
    fn test_missing_heading_is_all_or_nothing() {
        let body = vec!["## מצרכים", "- a"];
        assert_eq!(check(&body).len(), 3);
    }

    #[test]
    fn test_extra_heading_rejected() {
        let mut body = valid_body();
        body.push("## extra");
        assert_eq!(check(&body).len(), 3);
    }

    #[test]
    fn test_extract_sections_strips_indentation() {
        let body = vec!["  ## מצרכים  ", "text"];
        assert_eq!(extract_sections(&body), vec!["## מצרכים"]);
    }
}
