//! Gemini generateContent client.
//!
//! Wraps the Google Generative Language REST endpoint behind
//! [`CompletionClient`]. The session core never sees the wire shape.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::time::timeout;
use tracing::{debug, warn};

use folio_core::config::LlmConfig;

use crate::error::TransportError;
use crate::{CompletionClient, EMPTY_ANSWER_PLACEHOLDER};

/// HTTP client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    request_timeout: Duration,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client from the `[llm]` config section and a resolved API key.
    pub fn from_config(config: &LlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
            request_timeout: Duration::from_secs(config.timeout_secs),
            http: reqwest::Client::new(),
        }
    }

    fn request_url(&self) -> String {
        // The key rides in the query string; never log this URL.
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, TransportError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let secs = self.request_timeout.as_secs();
        let (status, text) = timeout(self.request_timeout, async {
            let response = self.http.post(self.request_url()).json(&body).send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        })
        .await
        .map_err(|_| TransportError::Timeout { secs })??;

        if !status.is_success() {
            warn!(status = status.as_u16(), model = %self.model, "Completion request failed");
            return Err(TransportError::Status {
                code: status.as_u16(),
            });
        }

        let answer = extract_answer(&text)?;
        debug!(answer_len = answer.len(), model = %self.model, "Completion received");
        Ok(answer)
    }
}

// Response shape of generateContent. Only the fields we read.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Pull the answer text out of a generateContent response body.
///
/// An unparseable body is a transport error; a parseable body with no
/// candidate text is the empty-answer condition and yields the placeholder.
fn extract_answer(body: &str) -> Result<String, TransportError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

    let answer = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .map(|p| p.text.as_str())
        .unwrap_or("");

    if answer.trim().is_empty() {
        return Ok(EMPTY_ANSWER_PLACEHOLDER.to_string());
    }
    Ok(answer.to_string())
}
