//! Interaction Tracker
//!
//! A global clock of "was a human just active": the timestamp of the most
//! recent trusted input, last-write-wins, no history, no player awareness.

use hush_host::InputEvent;

/// Most recent trusted-input timestamp
#[derive(Debug, Default)]
pub struct InteractionTracker {
    last_input_ms: Option<u64>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an input event delivered at `now_ms`. Only trusted events in
    /// a gesture category (pointer press, key press, touch start) count.
    pub fn observe(&mut self, event: &InputEvent, now_ms: u64) {
        if event.is_trusted && event.kind.arms_gesture() {
            self.record(now_ms);
        }
    }

    /// Overwrite the timestamp
    pub fn record(&mut self, now_ms: u64) {
        self.last_input_ms = Some(now_ms);
    }

    /// Whether a trusted input landed strictly less than `window_ms` ago
    pub fn is_recent(&self, now_ms: u64, window_ms: u64) -> bool {
        match self.last_input_ms {
            Some(last) => now_ms.saturating_sub(last) < window_ms,
            None => false,
        }
    }
}
