//! Rewrite Service Interface
//!
//! The external text-generation capability, narrowed to exactly the three
//! operations the pipeline consumes. Production and test implementations
//! both satisfy the trait, so orchestration code never branches on which
//! one it holds.

use crate::Result;
use async_trait::async_trait;
use tracing::info;

/// External rewrite/enrichment capability.
///
/// Implementations must strip any wrapping code-fence markers from raw
/// model output before returning (`strip_code_fence`).
#[async_trait]
pub trait DraftRewriter: Send + Sync {
    /// Rewrite or fix draft markdown. `issues` absent means "normalize"
    /// mode; present means "targeted fix" mode addressing only the listed
    /// issues. Returns the full corrected document.
    async fn rewrite(
        &self,
        markdown: &str,
        issues: Option<&[String]>,
        attempt: u32,
    ) -> Result<String>;

    /// Enrich ONLY the front matter; body content untouched. Returns the
    /// full document.
    async fn enrich_frontmatter(&self, markdown: &str) -> Result<String>;

    /// Produce ONLY the nutrition section content, never a full document.
    async fn enrich_nutrition(&self, markdown: &str) -> Result<String>;
}

/// Remove wrapping markdown code fences (``` or ```markdown) if present.
pub fn strip_code_fence(text: &str) -> String {
    let stripped = text.trim();
    let lines: Vec<&str> = stripped.lines().collect();
    if lines.len() >= 2 {
        let first = lines[0].trim();
        let last = lines[lines.len() - 1].trim();
        if first.starts_with("```") && last == "```" {
            info!("model output wrapped in markdown code fence - stripping it");
            return lines[1..lines.len() - 1].join("\n").trim().to_string();
        }
    }
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_plain_fence() {
        let wrapped = "```\n# Title\nbody\n```";
        assert_eq!(strip_code_fence(wrapped), "# Title\nbody");
    }

    #[test]
    fn test_strip_markdown_fence() {
        let wrapped = "```markdown\n# Title\n```";
        assert_eq!(strip_code_fence(wrapped), "# Title");
    }

    #[test]
    fn test_unfenced_text_trimmed_only() {
        assert_eq!(strip_code_fence("  # Title\nbody  "), "# Title\nbody");
    }

    #[test]
    fn test_inner_fence_untouched() {
        let text = "# Title\n```\ncode\n```\nafter";
        assert_eq!(strip_code_fence(text), text);
    }
}
