//! Provider seam between the summary client and generation backends.
//!
//! The client talks to a [`TextGenerator`] trait object, so the HTTP
//! backend can be swapped for an in-process stub in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::schema::Schema;

/// Errors from a generation backend.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("generation service returned no candidate text")]
    EmptyResponse,
}

/// One structured-output generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Credential for the generation service.
    pub api_key: String,
    /// Full prompt, already assembled by the caller.
    pub prompt: String,
    /// Schema the reply must conform to.
    pub schema: &'static Schema,
}

/// A backend that turns a prompt into raw model text.
///
/// Implementations return the model's text verbatim; decoding it into a
/// typed result is the caller's job.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name, for logging.
    fn name(&self) -> &'static str;

    /// Run one generation request to completion.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_includes_code_and_body() {
        let err = GenerateError::Status {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "quota exceeded".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("quota exceeded"));
    }

    #[test]
    fn empty_response_error_is_descriptive() {
        assert_eq!(
            GenerateError::EmptyResponse.to_string(),
            "generation service returned no candidate text"
        );
    }
}
