//! Ordered message log.
//!
//! Append-friendly collection of conversation turns with in-place
//! replacement by id, which the reveal path uses to grow a bot message
//! without duplicating it.

use folio_core::types::Message;
use uuid::Uuid;

/// The conversation history, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message at the end, preserving arrival order.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove any message with `id` and append `message` at the end.
    ///
    /// A message being incrementally revealed moves to the tail on every
    /// update; with at most one reveal in flight this is unobservable.
    /// When no message with `id` exists this is a plain append.
    pub fn replace(&mut self, id: Uuid, message: Message) {
        self.messages.retain(|m| m.id != id);
        self.messages.push(message);
    }

    /// An ordered copy of the log for rendering.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// The most recently placed message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
