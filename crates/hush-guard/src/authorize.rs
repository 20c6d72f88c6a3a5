//! Authorization State Machine
//!
//! One flag per tracked player: whether its current unmuted state was
//! explicitly permitted by a human gesture. The flag lives on the player
//! element itself as custom state, so there is no external table to clean
//! up when the host discards the element.
//!
//! The transition table is a pure function; [`AuthorizationMachine`] is the
//! driver that applies verdicts to the document and the player's mute flag.

use hush_dom::{DomTree, NodeId};
use hush_host::MediaDirectory;

use crate::interaction::InteractionTracker;

/// Custom state marking an authorized player
pub const AUTHORIZED_STATE: &str = "authorized";

/// Signals consumed by the state machine, per player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSignal {
    /// A fresh playback segment started
    PlayStarted,
    /// Playback paused
    Paused,
    /// Playback reached end of stream
    Ended,
    /// The player reported an audibility change
    AudibilityChanged { muted: bool },
    /// The player no longer overlaps the viewport
    VisibilityLost,
}

/// Outcome of one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// New authorization flag
    pub authorized: bool,
    /// Whether the player must be forced silent
    pub force_mute: bool,
}

/// Transition table. Total over the signal set; the caller applies
/// `force_mute` only when the player is currently audible.
///
/// Every fresh playback segment, and every paused or ended segment, must
/// re-earn authorization. An unmute is granted only when a trusted gesture
/// landed within the window; once granted, it holds across further unmute
/// reports until revoked by stop/restart or visibility loss.
pub fn transition(authorized: bool, signal: &PlayerSignal, gesture_recent: bool) -> Verdict {
    match signal {
        PlayerSignal::PlayStarted | PlayerSignal::Paused | PlayerSignal::Ended => Verdict {
            authorized: false,
            force_mute: true,
        },
        PlayerSignal::AudibilityChanged { muted: true } => Verdict {
            authorized: false,
            force_mute: false,
        },
        PlayerSignal::AudibilityChanged { muted: false } => {
            // An authorized player stays authorized without re-checking the
            // window; an unauthorized one earns it only inside the window.
            if authorized || gesture_recent {
                Verdict {
                    authorized: true,
                    force_mute: false,
                }
            } else {
                Verdict {
                    authorized: false,
                    force_mute: true,
                }
            }
        }
        PlayerSignal::VisibilityLost => Verdict {
            authorized: false,
            force_mute: true,
        },
    }
}

/// Applies transitions to the document and the player's mute flag
#[derive(Debug)]
pub struct AuthorizationMachine {
    window_ms: u64,
}

impl AuthorizationMachine {
    pub fn new(window_ms: u64) -> Self {
        Self { window_ms }
    }

    /// Check a player's authorization flag
    pub fn is_authorized(&self, dom: &DomTree, player: NodeId) -> bool {
        dom.has_state(player, AUTHORIZED_STATE)
    }

    /// Feed one signal for one player.
    ///
    /// Writes the authorization flag and, on deny, forces the player silent
    /// in the same step: no state exists where the flag is cleared while
    /// the player stays audible un-forced.
    pub fn on_signal(
        &self,
        dom: &mut DomTree,
        media: &mut MediaDirectory,
        player: NodeId,
        signal: &PlayerSignal,
        tracker: &InteractionTracker,
        now_ms: u64,
    ) {
        let was_authorized = self.is_authorized(dom, player);
        let gesture_recent = tracker.is_recent(now_ms, self.window_ms);
        let verdict = transition(was_authorized, signal, gesture_recent);

        if verdict.authorized != was_authorized {
            if verdict.authorized {
                tracing::debug!(?player, "authorizing unmute");
                dom.add_state(player, AUTHORIZED_STATE);
            } else {
                tracing::debug!(?player, ?signal, "revoking authorization");
                dom.remove_state(player, AUTHORIZED_STATE);
            }
        }

        if verdict.force_mute && !media.is_muted(player) {
            media.force_mute(player);
        }
    }
}
