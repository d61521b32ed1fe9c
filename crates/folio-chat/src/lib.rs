//! Conversational session core for folio.
//!
//! Manages message history, composes prompts from user input plus optional
//! document context, simulates incremental delivery of model answers, and
//! keeps flight state and message ordering consistent under asynchronous
//! completion.

pub mod context;
pub mod error;
pub mod log;
pub mod reveal;
pub mod session;

pub use context::DocumentContext;
pub use error::ChatError;
pub use log::MessageLog;
pub use reveal::{RevealEngine, RevealHandle, RevealUpdate, DEFAULT_REVEAL_INTERVAL};
pub use session::{Session, CONTEXT_SEPARATOR, TRANSPORT_ERROR_MESSAGE};
