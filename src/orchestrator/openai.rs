//! OpenAI-Compatible Rewrite Client
//!
//! Talks to a chat-completions endpoint. `OPENAI_API_KEY` is required;
//! `OPENAI_BASE_URL` optionally points at a proxy or compatible endpoint.

use super::prompts;
use super::rewriter::{strip_code_fence, DraftRewriter};
use crate::config::ConfigError;
use crate::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const TEMPERATURE: f32 = 0.2;

pub struct OpenAiRewriter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiRewriter {
    /// Build a client from the environment. Missing credentials are a
    /// configuration error, raised before any document is processed.
    pub fn from_env(model: impl Into<String>) -> std::result::Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model: model.into(),
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("rewrite service request failed")?
            .error_for_status()
            .context("rewrite service returned an error status")?;

        let body: ChatResponse = response
            .json()
            .await
            .context("rewrite service returned malformed JSON")?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        let cleaned = strip_code_fence(&content);
        debug!("model output received chars={}", cleaned.len());
        Ok(cleaned)
    }
}

#[async_trait]
impl DraftRewriter for OpenAiRewriter {
    async fn rewrite(
        &self,
        markdown: &str,
        issues: Option<&[String]>,
        attempt: u32,
    ) -> Result<String> {
        let (prompt, mode) = match issues {
            Some(issues) => (prompts::fix_prompt(markdown, issues), "fix"),
            None => (prompts::normalize_prompt(markdown), "normalize"),
        };
        info!(
            "rewrite mode={} attempt={} chars={}",
            mode,
            attempt,
            markdown.len()
        );
        self.complete(&prompt).await
    }

    async fn enrich_frontmatter(&self, markdown: &str) -> Result<String> {
        info!("front-matter enrichment chars={}", markdown.len());
        self.complete(&prompts::frontmatter_enrichment_prompt(markdown))
            .await
    }

    async fn enrich_nutrition(&self, markdown: &str) -> Result<String> {
        info!("nutrition enrichment chars={}", markdown.len());
        let block = self
            .complete(&prompts::nutrition_enrichment_prompt(markdown))
            .await?;
        Ok(block.trim().to_string())
    }
}
