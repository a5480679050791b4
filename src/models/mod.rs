pub mod lint;
pub mod outcome;

pub use lint::{IssueKind, LintIssue, LintReport};
pub use outcome::{ProcessOutcome, ProcessStatus, RejectionRecord};
