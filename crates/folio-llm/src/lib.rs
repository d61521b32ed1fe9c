//! folio transport crate - the boundary to the remote model service.
//!
//! Provides the CompletionClient trait for sending a composed prompt and
//! receiving the full answer text, a GeminiClient that wraps the Gemini
//! generateContent endpoint, and a MockCompletionClient for testing
//! without network access.

pub mod error;
pub mod gemini;

use std::sync::Mutex;

use async_trait::async_trait;

pub use error::TransportError;
pub use gemini::GeminiClient;

/// Text substituted when the provider returns a structurally valid but
/// empty answer, so a bot turn is never blank.
pub const EMPTY_ANSWER_PLACEHOLDER: &str = "The model returned an empty response.";

/// Client for requesting a completion from the remote model service.
///
/// This is the sole boundary to the model provider: one text prompt in,
/// the full answer text (or a transport failure) out. Implementations
/// must substitute [`EMPTY_ANSWER_PLACEHOLDER`] for empty answers.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the composed prompt and return the complete answer text.
    async fn complete(&self, prompt: &str) -> Result<String, TransportError>;
}

/// Mock completion client for testing.
///
/// Returns a canned answer (or a canned failure) and records every prompt
/// it receives, so tests can assert on prompt composition.
#[derive(Debug, Default)]
pub struct MockCompletionClient {
    answer: String,
    fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletionClient {
    /// Create a mock client that answers every prompt with `answer`.
    pub fn with_answer(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock client that fails every call with a network error.
    pub fn failing() -> Self {
        Self {
            answer: String::new(),
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// The prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, TransportError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        if self.fail {
            return Err(TransportError::Network("mock failure".to_string()));
        }
        if self.answer.trim().is_empty() {
            return Ok(EMPTY_ANSWER_PLACEHOLDER.to_string());
        }
        Ok(self.answer.clone())
    }
}
