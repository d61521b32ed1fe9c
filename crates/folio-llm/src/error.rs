//! Error types for the model transport.

use folio_core::error::FolioError;

/// Errors from the remote model transport.
///
/// All failure modes of a completion request collapse into this type; the
/// session controller recovers from every variant the same way, so callers
/// rarely match on it.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("model endpoint returned status {code}")]
    Status { code: u16 },
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response payload: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

impl From<TransportError> for FolioError {
    fn from(err: TransportError) -> Self {
        FolioError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Status { code: 500 };
        assert_eq!(err.to_string(), "model endpoint returned status 500");

        let err = TransportError::Timeout { secs: 30 };
        assert_eq!(err.to_string(), "request timed out after 30s");

        let err = TransportError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = TransportError::MalformedResponse("missing field".to_string());
        assert_eq!(
            err.to_string(),
            "malformed response payload: missing field"
        );
    }

    #[test]
    fn test_transport_error_into_folio_error() {
        let err: FolioError = TransportError::Status { code: 403 }.into();
        assert!(matches!(err, FolioError::Transport(_)));
        assert!(err.to_string().contains("403"));
    }
}
