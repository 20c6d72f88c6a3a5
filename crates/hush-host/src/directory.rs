//! Media Directory
//!
//! Binds DOM nodes to video playback state and queues the events each
//! host-side operation fires, in firing order, for synchronous delivery to
//! whoever drains them.

use std::collections::HashMap;

use hush_dom::NodeId;
use hush_media::{MediaError, MediaEvent, VideoElement};

/// Video elements by node, plus the pending event queue
#[derive(Debug, Default)]
pub struct MediaDirectory {
    videos: HashMap<NodeId, VideoElement>,
    queue: Vec<(NodeId, MediaEvent)>,
}

impl MediaDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind playback state to a node. Binding does not fire events; the
    /// element's current state simply pre-exists.
    pub fn bind(&mut self, node: NodeId, element: VideoElement) {
        self.videos.insert(node, element);
    }

    /// Playback state for a node
    pub fn get(&self, node: NodeId) -> Option<&VideoElement> {
        self.videos.get(&node)
    }

    /// Check a node's muted flag. Unbound nodes report silent: there is
    /// nothing there to make audible.
    pub fn is_muted(&self, node: NodeId) -> bool {
        self.videos.get(&node).map_or(true, |v| v.muted)
    }

    /// Number of bound players
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn fire(&mut self, node: NodeId, events: Vec<MediaEvent>) {
        for event in events {
            self.queue.push((node, event));
        }
    }

    /// Start playback on a node (no-op if unbound)
    pub fn play(&mut self, node: NodeId) {
        if let Some(video) = self.videos.get_mut(&node) {
            let events = video.play();
            self.fire(node, events);
        }
    }

    /// Pause playback on a node (no-op if unbound)
    pub fn pause(&mut self, node: NodeId) {
        if let Some(video) = self.videos.get_mut(&node) {
            let events = video.pause();
            self.fire(node, events);
        }
    }

    /// Run a node's playback to end of stream (no-op if unbound)
    pub fn finish(&mut self, node: NodeId) {
        if let Some(video) = self.videos.get_mut(&node) {
            let events = video.finish();
            self.fire(node, events);
        }
    }

    /// Write a node's muted flag (no-op if unbound)
    pub fn set_muted(&mut self, node: NodeId, muted: bool) {
        if let Some(video) = self.videos.get_mut(&node) {
            let events = video.set_muted(muted);
            self.fire(node, events);
        }
    }

    /// Write a node's volume (no-op if unbound)
    pub fn set_volume(&mut self, node: NodeId, volume: f64) -> Result<(), MediaError> {
        if let Some(video) = self.videos.get_mut(&node) {
            let events = video.set_volume(volume)?;
            self.fire(node, events);
        }
        Ok(())
    }

    /// Force a node silent. This is the policy deny-write; it fires the
    /// same `VolumeChange` a host mute write fires.
    pub fn force_mute(&mut self, node: NodeId) {
        tracing::debug!(?node, "forcing player silent");
        self.set_muted(node, true);
    }

    /// Drain pending events in firing order
    pub fn take_events(&mut self) -> Vec<(NodeId, MediaEvent)> {
        std::mem::take(&mut self.queue)
    }

    /// Check for undelivered events
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_queue_events_in_order() {
        let mut directory = MediaDirectory::new();
        let node = NodeId::from_raw(1);
        directory.bind(node, VideoElement::muted_by_default());

        directory.play(node);
        directory.set_muted(node, false);
        directory.finish(node);

        assert_eq!(
            directory.take_events(),
            vec![
                (node, MediaEvent::Play),
                (node, MediaEvent::VolumeChange),
                (node, MediaEvent::Pause),
                (node, MediaEvent::Ended),
            ]
        );
        assert!(!directory.has_pending());
    }

    #[test]
    fn test_unbound_node_is_silent_noop() {
        let mut directory = MediaDirectory::new();
        let node = NodeId::from_raw(9);

        directory.play(node);
        directory.set_muted(node, false);

        assert!(directory.take_events().is_empty());
        assert!(directory.is_muted(node));
    }

    #[test]
    fn test_force_mute_fires_volume_change() {
        let mut directory = MediaDirectory::new();
        let node = NodeId::from_raw(1);
        let mut video = VideoElement::new();
        video.muted = false;
        directory.bind(node, video);

        directory.force_mute(node);
        assert!(directory.is_muted(node));
        assert_eq!(directory.take_events(), vec![(node, MediaEvent::VolumeChange)]);

        directory.force_mute(node);
        assert!(directory.take_events().is_empty());
    }
}
