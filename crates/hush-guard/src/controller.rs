//! Playback Guard
//!
//! Wires the tracker, discovery engine, visibility monitor, and
//! authorization machine behind the host-driven surface. Every method is a
//! synchronous reaction to one host notification; the guard owns no
//! threads, timers, or queues of its own.

use std::collections::HashMap;

use hush_dom::{DomTree, NodeId, Rect};
use hush_host::{InputEvent, MediaDirectory};
use hush_media::MediaEvent;

use crate::authorize::{AuthorizationMachine, PlayerSignal};
use crate::clock::Clock;
use crate::config::GuardConfig;
use crate::discovery::DiscoveryEngine;
use crate::interaction::InteractionTracker;
use crate::visibility::VisibilityMonitor;

/// The assembled policy controller
pub struct PlaybackGuard {
    clock: Box<dyn Clock>,
    tracker: InteractionTracker,
    machine: AuthorizationMachine,
    visibility: VisibilityMonitor,
    discovery: DiscoveryEngine,
}

impl PlaybackGuard {
    pub fn new(config: GuardConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            tracker: InteractionTracker::new(),
            machine: AuthorizationMachine::new(config.interaction_window_ms),
            visibility: VisibilityMonitor::new(config.visibility_threshold),
            discovery: DiscoveryEngine::new(),
        }
    }

    /// Seed discovery on the document's root content container. Called once
    /// at load; every other root is discovered transitively.
    pub fn attach(&mut self, dom: &mut DomTree, root: NodeId) {
        tracing::info!(?root, "playback guard attached");
        let players = self.discovery.scan_and_observe(dom, root);
        self.adopt(&players);
    }

    /// Capture-stage input delivery. Feeds the interaction tracker only;
    /// no per-player handling happens here.
    pub fn on_input(&mut self, event: &InputEvent) {
        self.tracker.observe(event, self.clock.now_ms());
    }

    /// Deliver batched tree insertions: discover and register new players
    /// and new shadow roots.
    pub fn pump_mutations(&mut self, dom: &mut DomTree) {
        let players = self.discovery.drain_mutations(dom);
        self.adopt(&players);
    }

    /// Deliver batched player lifecycle/audibility events. Events for
    /// unregistered nodes are ignored.
    pub fn pump_media(&mut self, dom: &mut DomTree, media: &mut MediaDirectory) {
        for (player, event) in media.take_events() {
            if !self.discovery.is_registered(player) {
                continue;
            }
            let signal = match event {
                MediaEvent::Play => PlayerSignal::PlayStarted,
                MediaEvent::Pause => PlayerSignal::Paused,
                MediaEvent::Ended => PlayerSignal::Ended,
                // The notification carries no payload; the player's current
                // muted flag is what the event reports.
                MediaEvent::VolumeChange => PlayerSignal::AudibilityChanged {
                    muted: media.is_muted(player),
                },
            };
            self.machine.on_signal(
                dom,
                media,
                player,
                &signal,
                &self.tracker,
                self.clock.now_ms(),
            );
        }
    }

    /// Deliver a batched intersection pass: revoke every player that lost
    /// all viewport overlap.
    pub fn pump_visibility(
        &mut self,
        dom: &mut DomTree,
        media: &mut MediaDirectory,
        viewport: Rect,
        rects: &HashMap<NodeId, Rect>,
    ) {
        for player in self.visibility.poll(viewport, rects) {
            self.machine.on_signal(
                dom,
                media,
                player,
                &PlayerSignal::VisibilityLost,
                &self.tracker,
                self.clock.now_ms(),
            );
        }
    }

    /// Check a player's authorization flag
    pub fn is_authorized(&self, dom: &DomTree, player: NodeId) -> bool {
        self.machine.is_authorized(dom, player)
    }

    /// Check whether a player has been registered
    pub fn is_registered(&self, player: NodeId) -> bool {
        self.discovery.is_registered(player)
    }

    /// Number of registered players
    pub fn player_count(&self) -> usize {
        self.discovery.player_count()
    }

    /// Number of players under visibility observation
    pub fn observed_count(&self) -> usize {
        self.visibility.observed_count()
    }

    // Registration wiring: one visibility observation per player, created
    // atomically with registration.
    fn adopt(&mut self, players: &[NodeId]) {
        for &player in players {
            self.visibility.observe(player);
        }
    }
}
