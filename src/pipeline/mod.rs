//! Stage Pipeline
//!
//! Owns the numbered stage directories for one run and the file movement
//! between them. Responsible ONLY for copy/write naming, sidecar metadata,
//! and crash-safe persistence; it never inspects document content.
//!
//! Numbered directory prefixes keep lexical order equal to lifecycle order.
//! Staged files are never overwritten: retries write fresh attempt-numbered
//! names, and text writes go through a temporary file that is atomically
//! renamed into place.

use crate::models::{ProcessStatus, RejectionRecord};
use crate::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Named checkpoint in a document's processing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Input,
    Normalized,
    EnrichedFrontMatter,
    EnrichedNutrition,
    Merged,
    Linted,
    Fixed,
    Ready,
    Rejected,
}

impl Stage {
    /// All stages, in lifecycle order.
    pub const ALL: [Stage; 9] = [
        Stage::Input,
        Stage::Normalized,
        Stage::EnrichedFrontMatter,
        Stage::EnrichedNutrition,
        Stage::Merged,
        Stage::Linted,
        Stage::Fixed,
        Stage::Ready,
        Stage::Rejected,
    ];

    /// Directory name under the pipeline base.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Stage::Input => "01_input",
            Stage::Normalized => "02_normalized",
            Stage::EnrichedFrontMatter => "03_enriched_frontmatter",
            Stage::EnrichedNutrition => "04_enriched_nutrition",
            Stage::Merged => "05_merged",
            Stage::Linted => "06_linted",
            Stage::Fixed => "07_fixed",
            Stage::Ready => "08_ready",
            Stage::Rejected => "09_rejected",
        }
    }
}

/// Manages filesystem stages for a single run.
pub struct StagePipeline {
    base_dir: PathBuf,
    dry_run: bool,
}

impl StagePipeline {
    pub fn new(base_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            base_dir: base_dir.into(),
            dry_run,
        }
    }

    pub fn stage_dir(&self, stage: Stage) -> PathBuf {
        self.base_dir.join(stage.dir_name())
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Create all stage directories. Idempotent; no-op under dry-run.
    pub fn init_run(&self) -> Result<()> {
        if self.dry_run {
            debug!("dry-run: skipping stage directory creation");
            return Ok(());
        }

        for stage in Stage::ALL {
            std::fs::create_dir_all(self.stage_dir(stage))?;
        }
        std::fs::create_dir_all(self.reports_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;

        debug!("stage directories initialized under {}", self.base_dir.display());
        Ok(())
    }

    // -------------------------
    // public stage transitions
    // -------------------------

    pub fn to_input(&self, src: &Path) -> Result<PathBuf> {
        self.copy(src, Stage::Input)
    }

    pub fn to_normalized(&self, src_name: &str, text: &str, attempt: u32) -> Result<PathBuf> {
        self.write(src_name, text, Stage::Normalized, "norm", attempt)
    }

    pub fn to_enriched_frontmatter(
        &self,
        src_name: &str,
        text: &str,
        attempt: u32,
    ) -> Result<PathBuf> {
        self.write(src_name, text, Stage::EnrichedFrontMatter, "fm", attempt)
    }

    pub fn to_enriched_nutrition(
        &self,
        src_name: &str,
        text: &str,
        attempt: u32,
    ) -> Result<PathBuf> {
        self.write(src_name, text, Stage::EnrichedNutrition, "nutr", attempt)
    }

    pub fn to_merged(&self, src_name: &str, text: &str, attempt: u32) -> Result<PathBuf> {
        self.write(src_name, text, Stage::Merged, "merged", attempt)
    }

    pub fn to_linted(&self, src: &Path) -> Result<PathBuf> {
        self.copy(src, Stage::Linted)
    }

    pub fn to_fixed(&self, src_name: &str, text: &str, tag: &str, attempt: u32) -> Result<PathBuf> {
        self.write(src_name, text, Stage::Fixed, tag, attempt)
    }

    pub fn to_ready(&self, src: &Path) -> Result<PathBuf> {
        self.copy(src, Stage::Ready)
    }

    /// Copy into the rejected stage and persist the sidecar metadata record.
    pub fn to_rejected(&self, src: &Path, issues: &[String]) -> Result<PathBuf> {
        let target = self.copy(src, Stage::Rejected)?;
        let record = RejectionRecord {
            status: ProcessStatus::Rejected,
            issues: issues.to_vec(),
            timestamp: timestamp(),
        };
        self.write_metadata(&target, &record)?;
        Ok(target)
    }

    // -------------------------
    // internals
    // -------------------------

    fn copy(&self, src: &Path, stage: Stage) -> Result<PathBuf> {
        let dst_dir = self.stage_dir(stage);
        let name = src
            .file_name()
            .with_context(|| format!("source has no file name: {}", src.display()))?;
        let target = dst_dir.join(name);
        info!("stage copy: {} -> {}", src.display(), target.display());

        if self.dry_run {
            return Ok(target);
        }

        std::fs::create_dir_all(&dst_dir)?;
        std::fs::copy(src, &target)
            .with_context(|| format!("failed to copy into {}", target.display()))?;
        Ok(target)
    }

    fn write(
        &self,
        src_name: &str,
        text: &str,
        stage: Stage,
        tag: &str,
        attempt: u32,
    ) -> Result<PathBuf> {
        let dst_dir = self.stage_dir(stage);
        let target = dst_dir.join(make_name(src_name, tag, Some(attempt)));
        info!("stage write: {}", target.display());

        if self.dry_run {
            return Ok(target);
        }

        std::fs::create_dir_all(&dst_dir)?;

        // Crash-safe: fully write a temp sibling, then rename into place.
        let mut tmp = tempfile::NamedTempFile::new_in(&dst_dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&target)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to persist {}", target.display()))?;
        Ok(target)
    }

    fn write_metadata(&self, target: &Path, record: &RejectionRecord) -> Result<()> {
        let meta = sidecar_path(target);
        info!("writing metadata: {}", meta.display());

        if self.dry_run {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(record)?;
        let dir = meta
            .parent()
            .with_context(|| format!("no parent for {}", meta.display()))?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&meta).map_err(|e| e.error)?;
        Ok(())
    }
}

/// `<stem>_<tag>_a<attempt><ext>` - the shared-stem naming that ties one
/// document's artifacts together across stages.
fn make_name(src_name: &str, tag: &str, attempt: Option<u32>) -> String {
    let path = Path::new(src_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| src_name.to_string());
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut parts = vec![stem];
    if !tag.is_empty() {
        parts.push(tag.to_string());
    }
    if let Some(attempt) = attempt {
        parts.push(format!("a{}", attempt));
    }

    format!("{}{}", parts.join("_"), ext)
}

/// Sidecar path: `<file name>.meta.json` next to the artifact.
fn sidecar_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(".meta.json");
    target.with_file_name(name)
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
