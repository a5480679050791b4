//! Front-Matter Extraction and Parsing
//!
//! Splits the header block out of a document and parses it into a YAML
//! value through one of two interchangeable strategies selected at startup:
//! the full `serde_yaml` parser, or a minimal fallback recognizing only the
//! subset the recipe headers actually use.

pub mod basic;
pub mod yaml;

pub use basic::BasicParser;
pub use yaml::YamlParser;

use serde_yaml::Value;

/// Parsing strategy selection, wired from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ParserKind {
    /// Full YAML via serde_yaml
    #[default]
    Yaml,
    /// Minimal subset parser: scalars, inline lists, block lists.
    /// No nested mappings, no multi-line scalars.
    Basic,
}

/// One parsing interface over both strategies. Errors are plain strings:
/// a parse failure is a lint finding, not a program failure.
pub trait FrontMatterParser: Send + Sync {
    fn parse(&self, fm_lines: &[&str]) -> Result<Value, String>;
}

/// Construct the configured strategy.
pub fn make_parser(kind: ParserKind) -> Box<dyn FrontMatterParser> {
    match kind {
        ParserKind::Yaml => Box::new(YamlParser),
        ParserKind::Basic => Box::new(BasicParser),
    }
}

/// Locate the front-matter block. Returns `(fm_lines, end_index)` where
/// `end_index` is the index of the closing delimiter line, or `None` when
/// the document has no well-delimited header (no opening `---` on the first
/// line, or no closing `---` at all — both are treated as headerless).
pub fn extract_front_matter<'a>(lines: &[&'a str]) -> Option<(Vec<&'a str>, usize)> {
    if lines.first().map(|l| l.trim()) != Some("---") {
        return None;
    }

    let mut fm_lines = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.trim() == "---" {
            return Some((fm_lines, i));
        }
        fm_lines.push(*line);
    }

    None
}
