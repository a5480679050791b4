//! Pipeline Outcome Model
//!
//! One `ProcessOutcome` per input document per run, returned by the
//! repair orchestrator and consumed by the report renderers.

use crate::fixer::FixResult;
use crate::models::LintIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Terminal classification of a processed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Ready,
    Rejected,
}

impl ProcessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Ready => "ready",
            ProcessStatus::Rejected => "rejected",
        }
    }
}

/// Result of running the full repair pipeline on one input document.
/// Immutable once returned.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Path of the source document as scanned
    pub original_path: PathBuf,
    /// Last staged location (ready or rejected stage)
    pub final_path: PathBuf,
    pub status: ProcessStatus,
    /// Rewrite/validate cycles performed, >= 1
    pub attempts: u32,
    /// Final (possibly empty) issue list
    pub issues: Vec<LintIssue>,
    /// Before/after content pair plus applied-fix descriptions
    pub fix_result: FixResult,
}

/// Sidecar metadata persisted next to a rejected artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionRecord {
    pub status: ProcessStatus,
    pub issues: Vec<String>,
    pub timestamp: String,
}
