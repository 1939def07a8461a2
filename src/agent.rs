//! Summary client for structured signal analysis.
//!
//! Builds the prompt, attaches the response schema, and decodes the
//! model's JSON into a [`SummaryResult`]. Generation never fails from
//! the caller's point of view: missing credentials and backend errors
//! both degrade to placeholder results.

pub use crate::summary::SummaryResult;

use std::sync::Arc;

use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::gemini::GeminiGenerator;
use crate::provider::{GenerateError, GenerateRequest, TextGenerator};
use crate::schema::response_schema;
use crate::signal::Signal;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("LLM request failed: {0}")]
    RequestFailed(#[from] GenerateError),
    #[error("failed to parse response: {0}")]
    ParseError(String),
}

/// Client that turns raw signal content into a structured summary.
pub struct SummaryClient {
    api_key: Option<String>,
    model: String,
    persona: String,
    instruction: String,
    generator: Arc<dyn TextGenerator>,
}

impl SummaryClient {
    /// Build a client backed by the Gemini API.
    pub fn new(config: &Config) -> Result<Self, GenerateError> {
        let generator = Arc::new(GeminiGenerator::new()?);
        Ok(Self::assemble(config, generator))
    }

    /// Build a client over a caller-supplied backend.
    pub fn with_generator(config: &Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self::assemble(config, generator)
    }

    fn assemble(config: &Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            api_key: config.api_key().map(str::to_string),
            model: config.agent.model.clone(),
            persona: config.agent.persona.clone(),
            instruction: config.agent.prompt.clone(),
            generator,
        }
    }

    /// Whether a credential was available at construction time.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Summarize one signal's content.
    ///
    /// Infallible by design of the calling UI: without an API key this
    /// returns [`SummaryResult::missing_credential`] and never touches
    /// the network, and any request or parse failure is logged and
    /// collapsed into [`SummaryResult::generation_failed`].
    pub async fn summarize(&self, content: &str, context: &str) -> SummaryResult {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("no API key configured, returning placeholder summary");
            return SummaryResult::missing_credential();
        };

        match self.request_summary(api_key, content, context).await {
            Ok(summary) => summary,
            Err(e) => {
                error!(error = %e, "summary generation failed");
                SummaryResult::generation_failed()
            }
        }
    }

    async fn request_summary(
        &self,
        api_key: &str,
        content: &str,
        context: &str,
    ) -> Result<SummaryResult, SummaryError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            api_key: api_key.to_string(),
            prompt: build_prompt(&self.persona, &self.instruction, content, context),
            schema: response_schema(),
        };

        debug!(
            provider = self.generator.name(),
            model = %self.model,
            "requesting summary"
        );
        let raw = self.generator.generate(&request).await?;

        // Clean the response (strip markdown code blocks if present)
        let cleaned = strip_markdown_json(&raw);

        let summary: SummaryResult = serde_json::from_str(&cleaned)
            .map_err(|e| SummaryError::ParseError(format!("{}: {}", e, cleaned)))?;

        Ok(summary)
    }
}

/// Summarise every signal in the feed concurrently on one shared client.
///
/// Results come back in feed order regardless of completion order.
pub async fn summarize_feed(
    client: Arc<SummaryClient>,
    feed: Vec<Signal>,
) -> Result<Vec<(Signal, SummaryResult)>, JoinError> {
    let mut tasks = JoinSet::new();
    for (index, signal) in feed.into_iter().enumerate() {
        let client = client.clone();
        tasks.spawn(async move {
            let result = client.summarize(&signal.content, &signal.title).await;
            (index, signal, result)
        });
    }

    let mut rows: Vec<Option<(Signal, SummaryResult)>> = Vec::new();
    rows.resize_with(tasks.len(), || None);
    while let Some(joined) = tasks.join_next().await {
        let (index, signal, result) = joined?;
        rows[index] = Some((signal, result));
    }

    Ok(rows.into_iter().flatten().collect())
}

/// Build the prompt including persona, instruction, and the signal
fn build_prompt(persona: &str, instruction: &str, content: &str, context: &str) -> String {
    format!(
        r#"{}

{}

Context/Title: {}

Content:
"{}"

Return the response in JSON format."#,
        persona, instruction, context, content
    )
}

/// Strip markdown code block wrappers from JSON response
fn strip_markdown_json(text: &str) -> String {
    let trimmed = text.trim();

    // Remove ```json ... ``` or ``` ... ```
    if trimmed.starts_with("```") {
        let without_prefix = if trimmed.starts_with("```json") {
            &trimmed[7..]
        } else {
            &trimmed[3..]
        };

        if let Some(end_idx) = without_prefix.rfind("```") {
            return without_prefix[..end_idx].trim().to_string();
        }
    }

    trimmed.to_string()
}
