//! Hush Guard
//!
//! Enforces a gesture-gated audibility policy on embedded video players: a
//! player may only become audible as the direct, immediate consequence of a
//! trusted human input. Unmutes triggered by autoplay, by unrelated script,
//! or on a player scrolled out of view are suppressed.
//!
//! Four components form a closed loop over the live document:
//! - [`InteractionTracker`]: global timestamp of the last trusted input
//! - [`VisibilityMonitor`]: per-player viewport intersection
//! - [`AuthorizationMachine`]: per-player audibility decisions
//! - [`DiscoveryEngine`]: exhaustive, exactly-once player registration
//!   across the document and every shadow tree, live under mutation
//!
//! [`PlaybackGuard`] wires them together behind the host-driven surface.

pub mod authorize;
pub mod clock;
pub mod config;
pub mod controller;
pub mod discovery;
pub mod interaction;
pub mod visibility;

pub use authorize::{transition, AuthorizationMachine, PlayerSignal, Verdict, AUTHORIZED_STATE};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::GuardConfig;
pub use controller::PlaybackGuard;
pub use discovery::{DiscoveryEngine, PLAYER_TAG};
pub use interaction::InteractionTracker;
pub use visibility::VisibilityMonitor;
