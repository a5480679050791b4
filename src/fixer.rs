//! Deterministic Fixer
//!
//! Applies safe, mechanical fixes to draft text without AI involvement:
//! colon spacing in the header, and a placeholder `description` field when
//! the header lacks one. Runs at most once per document on the
//! deterministic path.

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// A single fix applied to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixAction {
    pub description: String,
}

impl FixAction {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Before/after content pair plus the applied-fix descriptions, used for
/// diff reporting.
#[derive(Debug, Clone)]
pub struct FixResult {
    pub path: PathBuf,
    pub original: String,
    pub fixed: String,
    pub actions: Vec<FixAction>,
}

impl FixResult {
    pub fn changed(&self) -> bool {
        self.original != self.fixed
    }
}

fn colon_no_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^([A-Za-z0-9_]+):(\S)").unwrap())
}

fn fix_colon_spacing(text: &str, actions: &mut Vec<FixAction>) -> String {
    let re = colon_no_space_re();
    let count = re.find_iter(text).count();
    for _ in 0..count {
        actions.push(FixAction::new(
            "Added missing space after ':' in front matter",
        ));
    }
    re.replace_all(text, "$1: $2").into_owned()
}

fn ensure_description(text: &str, actions: &mut Vec<FixAction>) -> String {
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();
    if lines.first().map(|l| l.trim()) != Some("---") {
        return text.to_string();
    }
    if lines.iter().any(|l| l.starts_with("description:")) {
        return text.to_string();
    }

    // Insert before the closing delimiter
    for i in 1..lines.len() {
        if lines[i].trim() == "---" {
            lines.insert(i, "description: \"TODO: add description\"\n");
            actions.push(FixAction::new("Added placeholder description field"));
            break;
        }
    }

    lines.concat()
}

/// Apply all deterministic fixes to one document's text.
pub fn fix_text(path: impl Into<PathBuf>, original: &str) -> FixResult {
    let mut actions = Vec::new();
    let fixed = fix_colon_spacing(original, &mut actions);
    let fixed = ensure_description(&fixed, &mut actions);

    FixResult {
        path: path.into(),
        original: original.to_string(),
        fixed,
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_colon_spacing() {
        let result = fix_text("a.md", "---\nlayout:recipe\ndescription: \"d\"\n---\n");
        assert!(result.changed());
        assert!(result.fixed.contains("layout: recipe"));
        assert_eq!(
            result.actions,
            vec![FixAction::new(
                "Added missing space after ':' in front matter"
            )]
        );
    }

    #[test]
    fn test_adds_placeholder_description() {
        let result = fix_text("a.md", "---\nlayout: recipe\n---\nbody\n");
        assert!(result
            .fixed
            .contains("description: \"TODO: add description\"\n---"));
        assert_eq!(result.actions.len(), 1);
    }

    #[test]
    fn test_existing_description_untouched() {
        let text = "---\nlayout: recipe\ndescription: \"d\"\n---\nbody\n";
        let result = fix_text("a.md", text);
        assert!(!result.changed());
        assert!(result.actions.is_empty());
    }

    #[test]
    fn test_headerless_document_untouched() {
        let text = "# title\nbody\n";
        let result = fix_text("a.md", text);
        assert!(!result.changed());
    }

    #[test]
    fn test_fix_converges_for_space_issue() {
        use crate::linter::LintEngine;

        let doc = "---\nlayout:recipe\ntitle: \"t\"\ncategory: Main\ndescription: \"d\"\n---\n## מצרכים\n- a\n## אופן ההכנה\n- b\n## ערכים תזונתיים (הערכה ל-100 גרם)\n- n\n### ויטמינים ומינרלים בולטים\n- v\n## הערות\n- h\n";
        let engine = LintEngine::default();

        let before = engine.lint_text(doc);
        assert!(!before.ok);
        assert!(before
            .issues
            .iter()
            .any(|i| i.code.as_deref() == Some("E_FM_SPACE")));

        let result = fix_text("a.md", doc);
        let after = engine.lint_text(&result.fixed);
        assert!(after.ok, "issues: {:?}", after.issues);
    }

    #[test]
    fn test_multiple_colon_fixes_counted() {
        let result = fix_text("a.md", "---\nlayout:recipe\ntitle:\"t\"\ndescription: \"d\"\n---\n");
        assert_eq!(result.actions.len(), 2);
    }
}
