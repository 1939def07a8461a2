//! Gemini backend for structured summary generation.
//!
//! Calls the `generateContent` REST endpoint directly with a JSON
//! response schema attached, and extracts the first candidate's text.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::provider::{GenerateError, GenerateRequest, TextGenerator};
use crate::schema::Schema;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Gemini `generateContent` API.
pub struct GeminiGenerator {
    http: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new() -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("signalflow/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: &'static Schema,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerateError> {
        let url = format!("{}/{}:generateContent", API_BASE, request.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.schema,
            },
        };

        // The key travels in a header so it never appears in logged URLs.
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", request.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Status { status, body });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        envelope.first_text().ok_or(GenerateError::EmptyResponse)
    }
}
