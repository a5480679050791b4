// Draftd - Stage-Based Preparation Tool for Publishing Recipe Drafts
// A Rust-powered lint and repair pipeline with bounded AI rewrite retries

pub mod cli;
pub mod config;
pub mod fixer;
pub mod linter;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use fixer::{FixAction, FixResult};
pub use linter::LintEngine;
pub use models::{IssueKind, LintIssue, LintReport, ProcessOutcome, ProcessStatus};
pub use pipeline::{Stage, StagePipeline};
