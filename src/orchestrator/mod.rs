//! Repair Orchestrator
//!
//! The bounded-retry state machine driving one document through the
//! pipeline: snapshot, optional AI normalization and enrichment, lint,
//! rewrite-on-failure up to the attempt budget, and terminal classification
//! into ready or rejected. Every intermediate version becomes a staged
//! artifact; nothing is ever edited in place.

pub mod openai;
pub mod prompts;
pub mod rewriter;

pub use openai::OpenAiRewriter;
pub use rewriter::{strip_code_fence, DraftRewriter};

use crate::fixer::{self, FixAction, FixResult};
use crate::linter::{sections, LintEngine};
use crate::models::{LintReport, ProcessOutcome, ProcessStatus};
use crate::pipeline::StagePipeline;
use crate::{Context, Result};
use anyhow::bail;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Heading owning the merge target region for nutrition enrichment.
const NUTRITION_HEADING: &str = sections::REQUIRED_SECTIONS[2];

pub struct RepairOrchestrator {
    engine: LintEngine,
    max_attempts: u32,
}

impl RepairOrchestrator {
    pub fn new(engine: LintEngine, max_attempts: u32) -> Self {
        Self {
            engine,
            max_attempts,
        }
    }

    /// Run the full repair pipeline on one input document.
    ///
    /// External-service failures and contract violations abort this
    /// document only; lint findings never raise.
    pub async fn process_draft(
        &self,
        draft_path: &Path,
        pipeline: &StagePipeline,
        rewriter: Option<&dyn DraftRewriter>,
    ) -> Result<ProcessOutcome> {
        let name = draft_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("draft has no file name: {}", draft_path.display()))?;

        let input_path = pipeline.to_input(draft_path)?;

        let bytes = std::fs::read(draft_path)
            .with_context(|| format!("failed to read draft: {}", draft_path.display()))?;
        let original_text = String::from_utf8_lossy(&bytes).into_owned();

        let mut actions: Vec<FixAction> = Vec::new();

        let run = match rewriter {
            Some(rewriter) => {
                self.run_ai_branch(&name, &original_text, pipeline, rewriter, &mut actions)
                    .await?
            }
            None => self.run_deterministic_branch(
                &name,
                &original_text,
                &input_path,
                draft_path,
                pipeline,
                &mut actions,
            )?,
        };

        let BranchResult {
            attempts,
            current_text,
            current_path,
            report,
        } = run;

        let (status, final_path) = if report.ok {
            info!("READY: {}", name);
            (ProcessStatus::Ready, pipeline.to_ready(&current_path)?)
        } else {
            error!("REJECTED: {} (issues={})", name, report.issues.len());
            (
                ProcessStatus::Rejected,
                pipeline.to_rejected(&current_path, &report.issue_strings())?,
            )
        };

        Ok(ProcessOutcome {
            original_path: draft_path.to_path_buf(),
            final_path,
            status,
            attempts,
            issues: report.sorted_issues(),
            fix_result: FixResult {
                path: draft_path.to_path_buf(),
                original: original_text,
                fixed: current_text,
                actions,
            },
        })
    }

    /// AI path: normalize, enrich front matter, enrich + merge nutrition,
    /// then lint/fix cycles bounded by the attempt budget.
    async fn run_ai_branch(
        &self,
        name: &str,
        original_text: &str,
        pipeline: &StagePipeline,
        rewriter: &dyn DraftRewriter,
        actions: &mut Vec<FixAction>,
    ) -> Result<BranchResult> {
        let mut attempts = 1;

        info!("AI normalize attempt={} for {}", attempts, name);
        let mut current_text = rewriter.rewrite(original_text, None, attempts).await?;
        pipeline.to_normalized(name, &current_text, attempts)?;
        actions.push(FixAction::new("AI normalization pass"));

        info!("AI front-matter enrichment for {}", name);
        current_text = rewriter.enrich_frontmatter(&current_text).await?;
        pipeline.to_enriched_frontmatter(name, &current_text, attempts)?;
        actions.push(FixAction::new("AI front-matter enrichment"));

        info!("AI nutrition enrichment for {}", name);
        let block = rewriter.enrich_nutrition(&current_text).await?;
        // Contract: the enrichment returns section content only. A block
        // opening with the header delimiter is a fatal violation, not a
        // lint issue.
        if block.trim_start().starts_with("---") {
            bail!("nutrition enrichment returned a full document for {}", name);
        }
        pipeline.to_enriched_nutrition(name, &block, attempts)?;

        current_text = merge_nutrition(&current_text, &block);
        let mut current_path = pipeline.to_merged(name, &current_text, attempts)?;
        actions.push(FixAction::new("AI nutrition enrichment merged"));

        let (_, mut report) = self.run_final_lint(pipeline, &current_path, &current_text)?;

        while !report.ok && attempts < self.max_attempts {
            attempts += 1;
            let issues = report.issue_strings();
            warn!(
                "lint issues remain (count={}). AI fix attempt={} for {}",
                issues.len(),
                attempts,
                name
            );
            current_text = rewriter
                .rewrite(&current_text, Some(&issues), attempts)
                .await?;
            current_path = pipeline.to_fixed(name, &current_text, "fix", attempts)?;
            actions.push(FixAction::new(format!("AI fix attempt {}", attempts)));
            report = self
                .run_final_lint(pipeline, &current_path, &current_text)?
                .1;
        }

        Ok(BranchResult {
            attempts,
            current_text,
            current_path,
            report,
        })
    }

    /// Deterministic path: lint the snapshot; on issues run the built-in
    /// fixer exactly once, never retried.
    fn run_deterministic_branch(
        &self,
        name: &str,
        original_text: &str,
        input_path: &Path,
        draft_path: &Path,
        pipeline: &StagePipeline,
        actions: &mut Vec<FixAction>,
    ) -> Result<BranchResult> {
        let attempts = 1;
        let mut current_text = original_text.to_string();
        let mut current_path = input_path.to_path_buf();

        let (_, mut report) = self.run_final_lint(pipeline, &current_path, &current_text)?;

        if !report.ok {
            warn!(
                "found {} lint issues. running deterministic fixer for {}",
                report.issues.len(),
                name
            );
            let fix = fixer::fix_text(draft_path, &current_text);
            actions.extend(fix.actions.clone());
            current_text = fix.fixed;
            current_path = pipeline.to_fixed(name, &current_text, "fixer", 1)?;
            report = self
                .run_final_lint(pipeline, &current_path, &current_text)?
                .1;
        }

        Ok(BranchResult {
            attempts,
            current_text,
            current_path,
            report,
        })
    }

    /// Copy the current artifact into the linted stage for the audit trail,
    /// then lint the in-memory text.
    fn run_final_lint(
        &self,
        pipeline: &StagePipeline,
        current_path: &Path,
        current_text: &str,
    ) -> Result<(PathBuf, LintReport)> {
        let linted_path = pipeline.to_linted(current_path)?;
        let report = self.engine.lint_text(current_text);
        Ok((linted_path, report))
    }
}

struct BranchResult {
    attempts: u32,
    current_text: String,
    current_path: PathBuf,
    report: LintReport,
}

/// Replace everything between the nutrition section heading and the next
/// heading (or end of document) with the fresh block. When the heading is
/// absent the document passes through unchanged.
pub fn merge_nutrition(document: &str, block: &str) -> String {
    let lines: Vec<&str> = document.lines().collect();

    let Some(start) = lines.iter().position(|l| l.trim() == NUTRITION_HEADING) else {
        return document.to_string();
    };

    let after = start + 1;
    let end = lines[after..]
        .iter()
        .position(|l| l.trim().starts_with('#'))
        .map(|i| after + i)
        .unwrap_or(lines.len());

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend(&lines[..=start]);
    out.extend(block.lines());
    out.extend(&lines[end..]);

    let mut merged = out.join("\n");
    if document.ends_with('\n') {
        merged.push('\n');
    }
    merged
}
