//! Hush Guard - Demo Entry Point
//!
//! Builds a synthetic page with a player nested two shadow trees deep,
//! attaches the guard, and scripts the interaction sequence: a trusted
//! click followed by an in-window unmute (granted), then a scroll out of
//! view (revoked).

use std::collections::HashMap;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hush_dom::{Document, Rect};
use hush_guard::{GuardConfig, MonotonicClock, PlaybackGuard};
use hush_host::{InputEvent, InputKind, MediaDirectory};
use hush_media::VideoElement;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    tracing::info!("starting hush guard demo");

    let mut doc = Document::new();
    let body = doc.body();
    let mut media = MediaDirectory::new();
    let mut guard = PlaybackGuard::new(GuardConfig::default(), Box::new(MonotonicClock::new()));
    guard.attach(doc.tree_mut(), body);

    // The host inserts a player already playing and muted, two shadow
    // trees deep, after load.
    let dom = doc.tree_mut();
    let outer_host = dom.create_element("div");
    let outer_shadow = dom.attach_shadow(outer_host);
    let inner_host = dom.create_element("div");
    dom.append_child(outer_shadow, inner_host);
    let inner_shadow = dom.attach_shadow(inner_host);
    let player = dom.create_element("video");
    dom.append_child(inner_shadow, player);

    let mut element = VideoElement::muted_by_default();
    element.paused = false;
    media.bind(player, element);

    dom.append_child(body, outer_host);
    guard.pump_mutations(doc.tree_mut());
    tracing::info!(players = guard.player_count(), "discovery complete");

    // Viewport layout: player visible near the top of the page.
    let viewport = Rect::from_xywh(0.0, 0.0, 1280.0, 720.0);
    let mut rects = HashMap::new();
    rects.insert(player, Rect::from_xywh(100.0, 100.0, 640.0, 360.0));
    guard.pump_visibility(doc.tree_mut(), &mut media, viewport, &rects);

    // Autoplay unmute attempt with no gesture: denied.
    media.set_muted(player, false);
    guard.pump_media(doc.tree_mut(), &mut media);
    tracing::info!(
        muted = media.is_muted(player),
        authorized = guard.is_authorized(doc.tree(), player),
        "after autoplay unmute attempt"
    );

    // The user clicks, and the page unmutes in direct response: granted.
    guard.on_input(&InputEvent::trusted(InputKind::PointerDown));
    media.set_muted(player, false);
    guard.pump_media(doc.tree_mut(), &mut media);
    tracing::info!(
        muted = media.is_muted(player),
        authorized = guard.is_authorized(doc.tree(), player),
        "after manual unmute"
    );

    // The player scrolls fully out of view: revoked, forced silent.
    rects.insert(player, Rect::from_xywh(100.0, 2_000.0, 640.0, 360.0));
    guard.pump_visibility(doc.tree_mut(), &mut media, viewport, &rects);
    guard.pump_media(doc.tree_mut(), &mut media);
    tracing::info!(
        muted = media.is_muted(player),
        authorized = guard.is_authorized(doc.tree(), player),
        "after scrolling out of view"
    );

    Ok(())
}
