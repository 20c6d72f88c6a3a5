//! Guard Configuration

use serde::Deserialize;

/// Tunable policy constants.
///
/// The window captures the causal span of a direct click/tap/keypress that
/// triggers the host's own unmute; the threshold is the overlap ratio below
/// which a player counts as out of view. Neither value carries deeper
/// semantics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// How long after a trusted input an unmute is considered human-caused
    pub interaction_window_ms: u64,
    /// Intersection ratio at or below which a player is out of view
    pub visibility_threshold: f64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            interaction_window_ms: 200,
            visibility_threshold: 0.0,
        }
    }
}
