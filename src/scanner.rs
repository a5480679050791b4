//! Draft Discovery
//!
//! Finds draft files at the top level of the drafts directory. Stage
//! subdirectories live under the same base, so recursion would rescan
//! staged artifacts.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("drafts directory does not exist: {0}")]
    Missing(PathBuf),
    #[error("drafts path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read drafts directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Deterministic, sorted list of draft files with the given extension
/// (matched case-insensitively, leading dot included, e.g. ".md").
pub fn scan_drafts(drafts_dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !drafts_dir.exists() {
        return Err(ScanError::Missing(drafts_dir.to_path_buf()));
    }
    if !drafts_dir.is_dir() {
        return Err(ScanError::NotADirectory(drafts_dir.to_path_buf()));
    }

    let wanted = extension.trim_start_matches('.').to_lowercase();

    let mut files: Vec<PathBuf> = std::fs::read_dir(drafts_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.to_string_lossy().to_lowercase() == wanted)
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_returns_sorted_matches_only() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("b.md"), "b").unwrap();
        std::fs::write(tmp.path().join("a.md"), "a").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        std::fs::create_dir(tmp.path().join("01_input")).unwrap();
        std::fs::write(tmp.path().join("01_input/staged.md"), "s").unwrap();

        let files = scan_drafts(tmp.path(), ".md").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_extension_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.MD"), "a").unwrap();
        assert_eq!(scan_drafts(tmp.path(), ".md").unwrap().len(), 1);
    }

    #[test]
    fn test_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            scan_drafts(&missing, ".md"),
            Err(ScanError::Missing(_))
        ));
    }

    #[test]
    fn test_file_instead_of_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.md");
        std::fs::write(&file, "a").unwrap();
        assert!(matches!(
            scan_drafts(&file, ".md"),
            Err(ScanError::NotADirectory(_))
        ));
    }
}
