//! Plain-text document extraction.
//!
//! The shipped `DocumentExtractor` implementation: accepts UTF-8 text
//! payloads as-is. Format-specific parsers (PDF, HTML, ...) plug in behind
//! the same trait.

use async_trait::async_trait;
use tracing::debug;

use crate::{DocumentExtractor, ExtractError};

/// Configuration for the plain-text extractor.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Maximum accepted document size in bytes.
    pub max_document_bytes: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Extractor for documents that already are UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    config: ExtractConfig,
}

impl PlainTextExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DocumentExtractor for PlainTextExtractor {
    async fn extract(&self, payload: &[u8]) -> Result<String, ExtractError> {
        if payload.is_empty() {
            return Err(ExtractError::Empty);
        }
        if payload.len() > self.config.max_document_bytes {
            return Err(ExtractError::TooLarge {
                size: payload.len(),
                limit: self.config.max_document_bytes,
            });
        }
        let text = std::str::from_utf8(payload).map_err(|_| ExtractError::InvalidEncoding)?;
        debug!(bytes = payload.len(), "Document text extracted");
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracts_utf8_text() {
        let extractor = PlainTextExtractor::default();
        let text = extractor.extract("Doc says X".as_bytes()).await.unwrap();
        assert_eq!(text, "Doc says X");
    }

    #[tokio::test]
    async fn test_rejects_empty_payload() {
        let extractor = PlainTextExtractor::default();
        let result = extractor.extract(&[]).await;
        assert!(matches!(result, Err(ExtractError::Empty)));
    }

    #[tokio::test]
    async fn test_rejects_oversized_payload() {
        let extractor = PlainTextExtractor::new(ExtractConfig {
            max_document_bytes: 4,
        });
        let result = extractor.extract(b"too large").await;
        match result {
            Err(ExtractError::TooLarge { size, limit }) => {
                assert_eq!(size, 9);
                assert_eq!(limit, 4);
            }
            other => panic!("expected TooLarge, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejects_invalid_utf8() {
        let extractor = PlainTextExtractor::default();
        let result = extractor.extract(&[0xff, 0xfe, 0x00]).await;
        assert!(matches!(result, Err(ExtractError::InvalidEncoding)));
    }

    #[tokio::test]
    async fn test_payload_at_limit_accepted() {
        let extractor = PlainTextExtractor::new(ExtractConfig {
            max_document_bytes: 4,
        });
        let text = extractor.extract(b"1234").await.unwrap();
        assert_eq!(text, "1234");
    }

    #[tokio::test]
    async fn test_unicode_payload() {
        let extractor = PlainTextExtractor::default();
        let text = extractor.extract("r\u{00e9}sum\u{00e9}".as_bytes()).await.unwrap();
        assert_eq!(text, "r\u{00e9}sum\u{00e9}");
    }
}
