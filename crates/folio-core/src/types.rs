use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Who a conversation turn is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The human participant.
    User,
    /// The remote language model.
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
        }
    }
}

/// What kind of content a message carries.
///
/// Document notices are synthetic user-visible records of an upload event;
/// they are never sent back to the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// An ordinary conversational turn.
    #[default]
    Text,
    /// A record of a document upload.
    DocumentNotice,
}

/// Whether a request to the remote model is currently outstanding.
///
/// Drives the typing indicator; `AwaitingResponse` holds from dispatch
/// until the reveal completes or the request fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightState {
    /// No request outstanding. Ready for a submission.
    #[default]
    Idle,
    /// A request has been dispatched and its response is not fully shown yet.
    AwaitingResponse,
}

impl fmt::Display for FlightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightState::Idle => write!(f, "Idle"),
            FlightState::AwaitingResponse => write!(f, "AwaitingResponse"),
        }
    }
}

// =============================================================================
// Message
// =============================================================================

/// One unit of conversation content.
///
/// Ids are minted per turn and stay stable across in-place reveal updates:
/// a bot message being incrementally revealed is replaced under the same id,
/// never duplicated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub kind: MessageKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a user text message with a fresh id.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            kind: MessageKind::Text,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a bot text message with a fresh id.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Bot,
            kind: MessageKind::Text,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a bot text message under a caller-supplied id.
    ///
    /// Used by the reveal path, where successive partial contents must
    /// share one id.
    pub fn bot_with_id(id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::Bot,
            kind: MessageKind::Text,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a document-notice message recording an upload event.
    pub fn document_notice(filename: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            kind: MessageKind::DocumentNotice,
            content: format!("Document uploaded: {}", filename),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_fields() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_bot_message_fields() {
        let msg = Message::bot("hi there");
        assert_eq!(msg.role, Role::Bot);
        assert_eq!(msg.kind, MessageKind::Text);
    }

    #[test]
    fn test_bot_with_id_preserves_id() {
        let id = Uuid::new_v4();
        let msg = Message::bot_with_id(id, "partial");
        assert_eq!(msg.id, id);
        assert_eq!(msg.role, Role::Bot);
    }

    #[test]
    fn test_document_notice_content() {
        let msg = Message::document_notice("report.pdf");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.kind, MessageKind::DocumentNotice);
        assert!(msg.content.contains("report.pdf"));
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        // Turns minted back to back (same millisecond) must not collide.
        let ids: Vec<Uuid> = (0..100).map(|_| Message::user("x").id).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_flight_state_default_is_idle() {
        assert_eq!(FlightState::default(), FlightState::Idle);
    }

    #[test]
    fn test_flight_state_display() {
        assert_eq!(FlightState::Idle.to_string(), "Idle");
        assert_eq!(FlightState::AwaitingResponse.to_string(), "AwaitingResponse");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Bot.to_string(), "bot");
    }

    #[test]
    fn test_message_serde_round_trip() {
        let msg = Message::document_notice("a.pdf");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_message_kind_serde_snake_case() {
        let json = serde_json::to_string(&MessageKind::DocumentNotice).unwrap();
        assert_eq!(json, "\"document_notice\"");
    }
}
