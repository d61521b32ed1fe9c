//! Response reveal engine.
//!
//! Simulates incremental delivery of a fully-known answer: one character
//! per tick at a fixed cadence, as a cancellable sequence of prefix
//! updates. The provider returns the whole answer in one response; this
//! engine is what makes it appear to stream.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Cadence between revealed characters, matching the reference behavior
/// of 20 time-units per character.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(20);

const UPDATE_CHANNEL_CAPACITY: usize = 32;

/// One partial-prefix update for the message identified by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealUpdate {
    pub id: Uuid,
    /// Prefix of the full answer revealed so far.
    pub prefix: String,
    /// Set on the terminal update, where `prefix` equals the full answer.
    pub done: bool,
}

/// Produces timed prefix updates for a known answer text.
#[derive(Debug, Clone)]
pub struct RevealEngine {
    interval: Duration,
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REVEAL_INTERVAL,
        }
    }
}

impl RevealEngine {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Start revealing `full_text` under `id`.
    ///
    /// For a text of `n` characters the handle yields exactly `n + 1`
    /// updates: the successive prefixes from empty to the full text, the
    /// last one marked `done`. The empty prefix is emitted immediately;
    /// each following update adds one character per interval. Characters
    /// are Unicode scalar values, so every prefix is a valid string.
    pub fn begin(&self, id: Uuid, full_text: &str) -> RevealHandle {
        let chars: Vec<char> = full_text.chars().collect();
        let interval = self.interval;
        let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            let mut prefix = String::with_capacity(chars.len());
            for shown in 0..=chars.len() {
                // The first tick completes immediately.
                ticker.tick().await;
                if shown > 0 {
                    prefix.push(chars[shown - 1]);
                }
                let update = RevealUpdate {
                    id,
                    prefix: prefix.clone(),
                    done: shown == chars.len(),
                };
                if tx.send(update).await.is_err() {
                    // Receiver gone; nothing left to reveal to.
                    return;
                }
            }
        });

        RevealHandle { updates: rx, task }
    }
}

/// Handle to an in-progress reveal.
///
/// Dropping the handle aborts the timer task: no further updates are
/// produced and the interval is released.
#[derive(Debug)]
pub struct RevealHandle {
    updates: mpsc::Receiver<RevealUpdate>,
    task: JoinHandle<()>,
}

impl RevealHandle {
    /// The next update, or `None` once the full text has been delivered.
    pub async fn next_update(&mut self) -> Option<RevealUpdate> {
        self.updates.recv().await
    }

    /// Whether the underlying timer task has finished or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
