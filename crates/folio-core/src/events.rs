use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{FlightState, MessageKind, Role};

/// Domain events emitted by a conversation session.
///
/// Events are emitted after state changes and consumed by render surfaces
/// that want to follow the log live instead of polling `snapshot()`. The
/// snapshot remains authoritative; a slow subscriber may miss events.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SessionEvent {
    /// A new message was appended to the log.
    MessageAppended {
        id: Uuid,
        role: Role,
        kind: MessageKind,
        content: String,
    },

    /// A bot message under reveal was updated with a longer prefix.
    ///
    /// `done` marks the terminal update, where `content` equals the full
    /// answer.
    MessageRevealed {
        id: Uuid,
        content: String,
        done: bool,
    },

    /// The session flight state changed.
    FlightChanged { state: FlightState },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_round_trip() {
        let event = SessionEvent::MessageRevealed {
            id: Uuid::new_v4(),
            content: "Hi".to_string(),
            done: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        match back {
            SessionEvent::MessageRevealed { content, done, .. } => {
                assert_eq!(content, "Hi");
                assert!(!done);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_flight_changed_event() {
        let event = SessionEvent::FlightChanged {
            state: FlightState::AwaitingResponse,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("awaiting_response"));
    }
}
