//! Batch Run
//!
//! Wires configuration, logging, scanning, orchestration, and reporting
//! into one run over the drafts directory. Returns the process exit code;
//! per-document fatal errors abort only that document, never the batch.

use crate::config::RunConfig;
use crate::linter::LintEngine;
use crate::logging;
use crate::models::{ProcessOutcome, ProcessStatus};
use crate::orchestrator::{DraftRewriter, OpenAiRewriter, RepairOrchestrator};
use crate::pipeline::StagePipeline;
use crate::report;
use crate::scanner;
use crate::{Colorize, Result};
use tracing::{error, info};

pub async fn run(config: RunConfig, verbose: bool) -> Result<i32> {
    config.validate()?;

    let pipeline = StagePipeline::new(&config.drafts_dir, config.dry_run);
    pipeline.init_run()?;

    let log_handle = logging::init(&config, &pipeline.logs_dir())?;

    if verbose {
        println!("=== draftd verbose ===");
        println!("drafts_dir     : {}", config.drafts_dir.display());
        println!("use_ai         : {}", config.use_ai);
        println!("model          : {}", config.model);
        println!("max_attempts   : {}", config.max_attempts);
        println!("dry_run        : {}", config.dry_run);
        println!("fail_on_issues : {}", config.fail_on_issues);
        println!("reports_dir    : {}", pipeline.reports_dir().display());
        match &log_handle.log_file {
            Some(path) => println!("log_file       : {}", path.display()),
            None => println!("log_file       : <dry-run: no log file>"),
        }
        println!("======================");
    }

    if config.dry_run {
        println!("{}", "DRY-RUN: no files will be created.".yellow());
    } else {
        println!("Logs written to: {}", pipeline.logs_dir().display());
    }

    info!("starting drafts checker");
    info!("drafts dir: {}", config.drafts_dir.display());
    info!("use ai: {}", config.use_ai);
    info!("model: {}", config.model);
    info!("max attempts: {}", config.max_attempts);
    info!("dry run: {}", config.dry_run);

    // Build the rewrite client only when requested; missing credentials are
    // a startup failure, before any document is processed.
    let rewriter: Option<OpenAiRewriter> = if config.use_ai {
        Some(OpenAiRewriter::from_env(&config.model)?)
    } else {
        None
    };

    let drafts = scanner::scan_drafts(&config.drafts_dir, ".md")?;
    if drafts.is_empty() {
        println!("No draft recipes found.");
        info!("no draft recipes found, exiting");
        return Ok(0);
    }

    let orchestrator =
        RepairOrchestrator::new(LintEngine::new(config.parser), config.max_attempts);

    let mut outcomes: Vec<ProcessOutcome> = Vec::new();
    let mut exit_code = 0;

    for draft in &drafts {
        info!("processing draft: {}", draft.display());

        let result = orchestrator
            .process_draft(
                draft,
                &pipeline,
                rewriter.as_ref().map(|r| r as &dyn DraftRewriter),
            )
            .await;

        match result {
            Ok(outcome) => {
                if config.fail_on_issues && outcome.status != ProcessStatus::Ready {
                    exit_code = 1;
                }
                outcomes.push(outcome);
            }
            Err(err) => {
                // Fatal for this document only
                error!("failed to process {}: {:#}", draft.display(), err);
                eprintln!(
                    "{}",
                    format!("Failed to process {}: {}", draft.display(), err).red()
                );
                if config.fail_on_issues {
                    exit_code = 1;
                }
            }
        }
    }

    if !config.dry_run {
        let reports_dir = pipeline.reports_dir();
        let mut report_paths = Vec::new();
        for outcome in &outcomes {
            report_paths.push(report::write_file_report(&reports_dir, outcome)?);
        }
        report::write_index_report(&reports_dir, &report_paths, &outcomes)?;
        info!("reports written");
    }

    let ready = outcomes
        .iter()
        .filter(|o| o.status == ProcessStatus::Ready)
        .count();
    let rejected = outcomes
        .iter()
        .filter(|o| o.status == ProcessStatus::Rejected)
        .count();
    println!(
        "Summary: ready={}, rejected={}, total={}",
        ready,
        rejected,
        outcomes.len()
    );

    info!("drafts checker finished");
    Ok(exit_code)
}
