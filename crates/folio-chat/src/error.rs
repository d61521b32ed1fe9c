//! Error types for the conversational session core.

use folio_extract::ExtractError;

/// Errors from the session controller.
///
/// Transport failures never surface here; the controller recovers from
/// them by appending a fixed error message to the log.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("a response is already in flight")]
    ResponseInFlight,
    #[error("document extraction failed: {0}")]
    Extraction(#[from] ExtractError),
}
