use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use draftd::config::{LogLevel, RunConfig};
use draftd::parser::ParserKind;
use draftd::Result;
use std::io;
use std::path::PathBuf;

/// Drafts Checker - stage-based preparation tool for publishing recipes.
///
/// Scans a drafts directory for Markdown recipe files, copies each file
/// through numbered processing stages (no in-place edits), runs validation
/// and linting checks, optionally rewrites or fixes drafts with an LLM
/// under a bounded retry budget, and produces HTML reports, diffs, and
/// logs. Exit code 0 indicates success; non-zero indicates validation
/// failures.
#[derive(Parser)]
#[command(name = "draftd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stage-based lint and repair pipeline for recipe drafts")]
struct Cli {
    /// Directory containing draft markdown files to process
    #[arg(long, default_value = "_drafts")]
    drafts_dir: PathBuf,

    /// Use the rewrite service to normalize/fix drafts until they pass
    /// lint (bounded by --max-attempts). Requires OPENAI_API_KEY.
    #[arg(long)]
    use_ai: bool,

    /// Model name (used only with --use-ai)
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Max total attempts per file (1 normalize + fixes)
    #[arg(long, default_value_t = 3)]
    max_attempts: u32,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Do not write any files or create any directories
    #[arg(long)]
    dry_run: bool,

    /// Do not return exit code 1 when files are rejected
    #[arg(long)]
    no_fail_on_issues: bool,

    /// Front-matter parsing strategy
    #[arg(long, value_enum, default_value = "yaml")]
    parser: ParserKind,

    /// Print resolved parameters and log location
    #[arg(long)]
    verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "draftd", &mut io::stdout());
        return;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    match runtime.block_on(run_async(cli)) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    }
}

async fn run_async(cli: Cli) -> Result<i32> {
    let config = RunConfig {
        drafts_dir: cli.drafts_dir,
        use_ai: cli.use_ai,
        model: cli.model,
        max_attempts: cli.max_attempts,
        log_level: cli.log_level,
        dry_run: cli.dry_run,
        fail_on_issues: !cli.no_fail_on_issues,
        parser: cli.parser,
    };

    draftd::cli::check::run(config, cli.verbose).await
}
