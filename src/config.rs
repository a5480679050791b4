//! Run Configuration
//!
//! One explicit configuration object wired from the CLI and passed into
//! component constructors. Validation happens at startup, before any
//! document is touched.

use crate::parser::ParserKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--max-attempts must be >= 1")]
    InvalidMaxAttempts,
    #[error("OPENAI_API_KEY is not set. Set it in your environment before using --use-ai.")]
    MissingApiKey,
}

/// Console/file log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Resolved parameters for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory containing draft markdown files; stages are created
    /// beneath it.
    pub drafts_dir: PathBuf,
    /// Use the rewrite service to normalize/fix drafts until they pass lint.
    pub use_ai: bool,
    /// Model name, used only with `use_ai`.
    pub model: String,
    /// Max total attempts per file (1 normalize + fixes). Must be >= 1.
    pub max_attempts: u32,
    pub log_level: LogLevel,
    /// Do not write any files or create any directories.
    pub dry_run: bool,
    /// Return exit code 1 if any file is rejected.
    pub fail_on_issues: bool,
    /// Front-matter parsing strategy.
    pub parser: ParserKind,
}

impl RunConfig {
    /// Startup validation; fatal before any document is processed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts < 1 {
            return Err(ConfigError::InvalidMaxAttempts);
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            drafts_dir: PathBuf::from("_drafts"),
            use_ai: false,
            model: "gpt-4o-mini".to_string(),
            max_attempts: 3,
            log_level: LogLevel::Info,
            dry_run: false,
            fail_on_issues: true,
            parser: ParserKind::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = RunConfig {
            max_attempts: 0,
            ..RunConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxAttempts)
        ));
    }
}
