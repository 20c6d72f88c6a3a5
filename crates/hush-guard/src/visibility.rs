//! Visibility Monitor
//!
//! One intersection observation per registered player. Emits the players
//! that transitioned to zero viewport overlap; the controller turns each
//! into a revocation.

use std::collections::HashMap;

use hush_dom::{NodeId, Rect};
use hush_host::IntersectionObserver;

/// Per-player viewport observation
#[derive(Debug)]
pub struct VisibilityMonitor {
    observer: IntersectionObserver,
}

impl VisibilityMonitor {
    pub fn new(threshold: f64) -> Self {
        Self {
            observer: IntersectionObserver::new(threshold),
        }
    }

    /// Observe a player. Created once at registration; re-observing an
    /// already observed player keeps the existing observation.
    pub fn observe(&mut self, player: NodeId) {
        self.observer.observe(player);
    }

    /// Check if a player is observed
    pub fn is_observing(&self, player: NodeId) -> bool {
        self.observer.is_observing(player)
    }

    /// Number of observed players
    pub fn observed_count(&self) -> usize {
        self.observer.observed_count()
    }

    /// Players that just lost all viewport overlap
    pub fn poll(&mut self, viewport: Rect, rects: &HashMap<NodeId, Rect>) -> Vec<NodeId> {
        self.observer
            .check(viewport, rects)
            .into_iter()
            .filter(|entry| !entry.is_intersecting)
            .map(|entry| entry.target)
            .collect()
    }
}
