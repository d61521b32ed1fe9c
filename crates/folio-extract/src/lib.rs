//! folio extraction crate - document-to-text extraction service.
//!
//! Provides the DocumentExtractor trait for turning an uploaded document
//! payload into plain text, a PlainTextExtractor for UTF-8 text documents,
//! and a MockExtractor for testing without real payloads.

pub mod plain_text;

use async_trait::async_trait;
use folio_core::error::FolioError;

pub use plain_text::{ExtractConfig, PlainTextExtractor};

/// Errors from document extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("document payload is empty")]
    Empty,
    #[error("document is {size} bytes, exceeds limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    #[error("document is not valid UTF-8 text")]
    InvalidEncoding,
    #[error("unsupported document: {0}")]
    Unsupported(String),
}

impl From<ExtractError> for FolioError {
    fn from(err: ExtractError) -> Self {
        FolioError::Extraction(err.to_string())
    }
}

/// Service for extracting plain text from an uploaded document payload.
///
/// Implementations wrap format-specific parsers behind a uniform async
/// interface; the session core depends only on this trait.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extract text from raw document bytes.
    ///
    /// # Arguments
    /// * `payload` - The document file contents.
    ///
    /// # Returns
    /// The extracted text. May be empty if the document contains no text.
    async fn extract(&self, payload: &[u8]) -> Result<String, ExtractError>;
}

/// Mock extractor for testing.
///
/// Returns deterministic text output without parsing anything. Useful for
/// unit testing the upload pipeline.
#[derive(Debug, Clone)]
pub struct MockExtractor {
    /// The text to return for any input.
    response_text: String,
    /// When set, every call fails.
    fail: bool,
}

impl MockExtractor {
    /// Create a new mock extractor with default response text.
    pub fn new() -> Self {
        Self {
            response_text: "Mock extracted text: lorem ipsum dolor sit amet".to_string(),
            fail: false,
        }
    }

    /// Create a mock extractor that returns the specified text.
    pub fn with_text(text: &str) -> Self {
        Self {
            response_text: text.to_string(),
            fail: false,
        }
    }

    /// Create a mock extractor that fails every call.
    pub fn failing() -> Self {
        Self {
            response_text: String::new(),
            fail: true,
        }
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractor for MockExtractor {
    async fn extract(&self, payload: &[u8]) -> Result<String, ExtractError> {
        if self.fail {
            return Err(ExtractError::Unsupported("mock failure".to_string()));
        }
        if payload.is_empty() {
            return Err(ExtractError::Empty);
        }
        Ok(self.response_text.clone())
    }
}
