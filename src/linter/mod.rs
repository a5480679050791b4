//! Lint Engine
//!
//! Orchestrates the four validation passes over one document snapshot:
//! header syntax, header parsing, header schema, and body sections. Pure -
//! no I/O, no external calls; malformed content becomes issues in a report,
//! never an error.

pub mod schema;
pub mod sections;
pub mod syntax;

use crate::models::{IssueKind, LintIssue, LintReport};
use crate::parser::{self, FrontMatterParser, ParserKind};

pub struct LintEngine {
    parser: Box<dyn FrontMatterParser>,
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::new(ParserKind::Yaml)
    }
}

impl LintEngine {
    pub fn new(parser_kind: ParserKind) -> Self {
        Self {
            parser: parser::make_parser(parser_kind),
        }
    }

    /// Lint one document snapshot.
    ///
    /// A document that does not begin with a `---` delimiter line, or whose
    /// closing delimiter is never found, is treated as headerless and passes
    /// clean: absence of required content is the caller's concern, not a
    /// malformed header.
    pub fn lint_text(&self, text: &str) -> LintReport {
        let lines: Vec<&str> = text.lines().collect();

        let Some((fm_lines, end)) = parser::extract_front_matter(&lines) else {
            return LintReport::clean();
        };

        let syntax = syntax::check(&fm_lines);
        if !syntax.issues.is_empty() {
            let mut report = LintReport::with_issues(syntax.issues, syntax.pretty_lines);
            report.canonicalize();
            return report;
        }

        let front = match self.parser.parse(&fm_lines) {
            Ok(value) => value,
            Err(message) => {
                return LintReport::with_issues(
                    vec![LintIssue::unscoped(
                        IssueKind::HeaderSemantic,
                        "E_FM_YAML",
                        message,
                    )],
                    Vec::new(),
                );
            }
        };

        let Some(mapping) = front.as_mapping() else {
            return LintReport::with_issues(
                vec![LintIssue::unscoped(
                    IssueKind::HeaderSemantic,
                    "E_FM_NOT_MAP",
                    "Front matter must be a YAML mapping",
                )],
                Vec::new(),
            );
        };

        let mut issues = schema::check(mapping);
        issues.extend(sections::check(&lines[end + 1..]));

        let mut report = LintReport::with_issues(issues, Vec::new());
        report.canonicalize();
        report
    }
}
