//! Conversation session controller.
//!
//! Central coordinator wiring the message log, document context, reveal
//! engine, and model transport. Owns the flight state and mediates every
//! mutation; the caller owns the `Session` and serializes access through
//! `&mut self`, so the core needs no locks.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;

use folio_core::config::ChatConfig;
use folio_core::events::SessionEvent;
use folio_core::types::{FlightState, Message, MessageKind, Role};
use folio_extract::DocumentExtractor;
use folio_llm::CompletionClient;

use crate::context::DocumentContext;
use crate::error::ChatError;
use crate::log::MessageLog;
use crate::reveal::RevealEngine;

/// Preamble inserted between the user's raw input and the document context
/// when composing an augmented prompt.
pub const CONTEXT_SEPARATOR: &str = "\n\nHere is some context from the uploaded document:\n";

/// Fixed content of the bot message appended when the transport fails.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to fetch a response from the model.";

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A single conversation session.
///
/// State machine over [`FlightState`]: `Idle` accepts submissions;
/// `AwaitingResponse` holds from dispatch until the reveal completes or
/// the request fails, and rejects further submissions.
pub struct Session {
    log: MessageLog,
    context: DocumentContext,
    flight: FlightState,
    reveal: RevealEngine,
    client: Arc<dyn CompletionClient>,
    extractor: Arc<dyn DocumentExtractor>,
    events: broadcast::Sender<SessionEvent>,
}

impl Session {
    /// Create a session over the given transport and extractor.
    pub fn new(
        config: &ChatConfig,
        client: Arc<dyn CompletionClient>,
        extractor: Arc<dyn DocumentExtractor>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            log: MessageLog::new(),
            context: DocumentContext::new(),
            flight: FlightState::Idle,
            reveal: RevealEngine::new(std::time::Duration::from_millis(
                config.reveal_interval_ms,
            )),
            client,
            extractor,
            events,
        }
    }

    /// Submit a user message and drive the exchange to completion.
    ///
    /// Composes the prompt (augmented with document context when present),
    /// appends the user turn, calls the transport, and reveals the answer
    /// into the log. A transport failure becomes exactly one fixed-content
    /// bot message; it is never propagated, and the session returns to
    /// `Idle` and remains usable.
    pub async fn submit(&mut self, text: &str) -> Result<(), ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.flight == FlightState::AwaitingResponse {
            return Err(ChatError::ResponseInFlight);
        }

        // Context is read once, at composition time.
        let prompt = self.compose_prompt(trimmed);
        self.append(Message::user(trimmed));
        self.set_flight(FlightState::AwaitingResponse);

        match self.client.complete(&prompt).await {
            Ok(answer) => self.reveal_answer(&answer).await,
            Err(e) => {
                warn!(error = %e, "Completion request failed");
                self.append(Message::bot(TRANSPORT_ERROR_MESSAGE));
            }
        }

        self.set_flight(FlightState::Idle);
        Ok(())
    }

    /// Upload a document: record a notice turn immediately, then extract
    /// text and replace the document context.
    ///
    /// On extraction failure the context is left untouched, the log gains
    /// no further message, and the error is returned for the caller to
    /// surface as it sees fit.
    pub async fn upload_document(
        &mut self,
        payload: &[u8],
        filename: &str,
    ) -> Result<(), ChatError> {
        self.append(Message::document_notice(filename));

        match self.extractor.extract(payload).await {
            Ok(text) => {
                debug!(filename, text_len = text.len(), "Document context replaced");
                self.context.replace(text);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, filename, "Document extraction failed");
                Err(ChatError::Extraction(e))
            }
        }
    }

    /// An ordered copy of the conversation for rendering.
    pub fn snapshot(&self) -> Vec<Message> {
        self.log.snapshot()
    }

    /// Whether a request is currently outstanding.
    pub fn flight_state(&self) -> FlightState {
        self.flight
    }

    /// Whether a document context is available for prompt augmentation.
    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }

    /// Subscribe to session events for live rendering.
    ///
    /// The snapshot remains authoritative; a slow subscriber may miss
    /// events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn compose_prompt(&self, text: &str) -> String {
        if self.context.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", text, CONTEXT_SEPARATOR, self.context.get())
        }
    }

    async fn reveal_answer(&mut self, answer: &str) {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let mut handle = self.reveal.begin(id, answer);

        while let Some(update) = handle.next_update().await {
            self.log.replace(
                id,
                Message {
                    id,
                    role: Role::Bot,
                    kind: MessageKind::Text,
                    content: update.prefix.clone(),
                    created_at,
                },
            );
            let _ = self.events.send(SessionEvent::MessageRevealed {
                id,
                content: update.prefix,
                done: update.done,
            });
        }
    }

    fn append(&mut self, message: Message) {
        let event = SessionEvent::MessageAppended {
            id: message.id,
            role: message.role,
            kind: message.kind,
            content: message.content.clone(),
        };
        self.log.append(message);
        let _ = self.events.send(event);
    }

    fn set_flight(&mut self, state: FlightState) {
        if self.flight != state {
            self.flight = state;
            let _ = self.events.send(SessionEvent::FlightChanged { state });
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
