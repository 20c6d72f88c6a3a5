//! Discovery Engine
//!
//! Finds every player in the document exactly once — present now or added
//! later, at any depth, including inside shadow trees — and keeps finding
//! them as the tree mutates.
//!
//! Tree roots (the document region and every discovered shadow root) are
//! registered idempotently; each gets one full sweep plus a subtree watcher.
//! Roots are walked through an explicit work queue rather than call
//! recursion, so deeply nested shadow chains cannot exhaust the stack.

use std::collections::{HashSet, VecDeque};

use hush_dom::{DomTree, NodeId, WatcherId};

/// Tag name identifying a player element
pub const PLAYER_TAG: &str = "video";

/// Root and player registries plus the per-root watchers
#[derive(Debug, Default)]
pub struct DiscoveryEngine {
    roots: HashSet<NodeId>,
    players: HashSet<NodeId>,
    watchers: Vec<WatcherId>,
}

impl DiscoveryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a player has been registered
    pub fn is_registered(&self, player: NodeId) -> bool {
        self.players.contains(&player)
    }

    /// Number of registered players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of registered tree roots
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Sweep `root` and place it under continuous observation.
    ///
    /// A no-op on NONE and on already-registered roots. Returns the players
    /// registered by this call; each appears exactly once, ever.
    pub fn scan_and_observe(&mut self, dom: &mut DomTree, root: NodeId) -> Vec<NodeId> {
        let mut fresh = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(root);
        self.drain_root_queue(dom, &mut queue, &mut fresh);
        fresh
    }

    /// Drain every watcher's pending insertions and fan out over them.
    ///
    /// An inserted node can itself be a player, can host its own shadow
    /// root, and can contain players and shadow roots at any depth, all at
    /// once; all four cases are covered for every insertion. Returns the
    /// players registered by this call.
    pub fn drain_mutations(&mut self, dom: &mut DomTree) -> Vec<NodeId> {
        let mut fresh = Vec::new();
        let mut queue = VecDeque::new();

        // Watchers installed while draining start with an empty record set;
        // their roots get a full sweep at registration, so nothing is lost.
        let watchers: Vec<WatcherId> = self.watchers.clone();
        for watcher in watchers {
            for record in dom.take_records(watcher) {
                for node in record.added {
                    self.fan_out(dom, node, &mut queue, &mut fresh);
                }
            }
        }

        self.drain_root_queue(dom, &mut queue, &mut fresh);
        fresh
    }

    fn drain_root_queue(
        &mut self,
        dom: &mut DomTree,
        queue: &mut VecDeque<NodeId>,
        fresh: &mut Vec<NodeId>,
    ) {
        while let Some(root) = queue.pop_front() {
            self.scan_root(dom, root, queue, fresh);
        }
    }

    fn scan_root(
        &mut self,
        dom: &mut DomTree,
        root: NodeId,
        queue: &mut VecDeque<NodeId>,
        fresh: &mut Vec<NodeId>,
    ) {
        if !root.is_valid() || !self.roots.insert(root) {
            return;
        }
        tracing::debug!(?root, "scanning tree root");

        // Initial sweep, including the root itself.
        if dom.is_tag(root, PLAYER_TAG) {
            self.register(root, fresh);
        }
        for player in dom.query_tag(root, PLAYER_TAG) {
            self.register(player, fresh);
        }

        // Continuous observation of future insertions.
        self.watchers.push(dom.watch_subtree(root));

        // Existing-subtree sweep: shadow roots already nested under this
        // root are unreachable by the queries above.
        for node in dom.descendants(root) {
            let shadow = dom.shadow_root_of(node);
            if shadow.is_valid() {
                queue.push_back(shadow);
            }
        }
    }

    fn fan_out(
        &mut self,
        dom: &DomTree,
        node: NodeId,
        queue: &mut VecDeque<NodeId>,
        fresh: &mut Vec<NodeId>,
    ) {
        if !node.is_valid() {
            return;
        }

        if dom.is_tag(node, PLAYER_TAG) {
            self.register(node, fresh);
        }

        let shadow = dom.shadow_root_of(node);
        if shadow.is_valid() {
            queue.push_back(shadow);
        }

        for player in dom.query_tag(node, PLAYER_TAG) {
            self.register(player, fresh);
        }

        for descendant in dom.descendants(node) {
            let shadow = dom.shadow_root_of(descendant);
            if shadow.is_valid() {
                queue.push_back(shadow);
            }
        }
    }

    fn register(&mut self, player: NodeId, fresh: &mut Vec<NodeId>) {
        if self.players.insert(player) {
            tracing::debug!(?player, "registered player");
            fresh.push(player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescanning_a_root_registers_nothing() {
        let mut dom = DomTree::new();
        let body = dom.create_element("body");
        let video = dom.create_element("video");
        dom.append_child(dom.root(), body);
        dom.append_child(body, video);

        let mut engine = DiscoveryEngine::new();
        assert_eq!(engine.scan_and_observe(&mut dom, body), vec![video]);
        assert!(engine.scan_and_observe(&mut dom, body).is_empty());
        assert_eq!(engine.player_count(), 1);
        assert_eq!(engine.root_count(), 1);
    }

    #[test]
    fn test_overlapping_roots_register_players_once() {
        let mut dom = DomTree::new();
        let body = dom.create_element("body");
        let video = dom.create_element("video");
        dom.append_child(dom.root(), body);
        dom.append_child(body, video);

        let mut engine = DiscoveryEngine::new();
        engine.scan_and_observe(&mut dom, body);
        let root = dom.root();
        assert!(engine.scan_and_observe(&mut dom, root).is_empty());
        assert_eq!(engine.player_count(), 1);
    }

    #[test]
    fn test_root_that_is_itself_a_player() {
        let mut dom = DomTree::new();
        let video = dom.create_element("video");
        dom.append_child(dom.root(), video);

        let mut engine = DiscoveryEngine::new();
        assert_eq!(engine.scan_and_observe(&mut dom, video), vec![video]);
    }

    #[test]
    fn test_scan_none_is_noop() {
        let mut dom = DomTree::new();
        let mut engine = DiscoveryEngine::new();
        assert!(engine.scan_and_observe(&mut dom, NodeId::NONE).is_empty());
        assert_eq!(engine.root_count(), 0);
    }

    #[test]
    fn test_initial_scan_reaches_nested_shadow_players() {
        let mut dom = DomTree::new();
        let body = dom.create_element("body");
        dom.append_child(dom.root(), body);

        let host = dom.create_element("div");
        dom.append_child(body, host);
        let shadow = dom.attach_shadow(host);
        let inner_host = dom.create_element("div");
        dom.append_child(shadow, inner_host);
        let inner_shadow = dom.attach_shadow(inner_host);
        let video = dom.create_element("video");
        dom.append_child(inner_shadow, video);

        let mut engine = DiscoveryEngine::new();
        let found = engine.scan_and_observe(&mut dom, body);
        assert_eq!(found, vec![video]);
        // body + two shadow roots
        assert_eq!(engine.root_count(), 3);
    }

    #[test]
    fn test_mutation_fan_out_covers_all_four_cases() {
        let mut dom = DomTree::new();
        let body = dom.create_element("body");
        dom.append_child(dom.root(), body);

        let mut engine = DiscoveryEngine::new();
        engine.scan_and_observe(&mut dom, body);

        // Build a detached fragment exercising every fan-out case at once:
        // the inserted node hosts a shadow root, holds a nested player, and
        // holds a deeper element hosting another shadow root with a player.
        let top = dom.create_element("section");
        let top_shadow = dom.attach_shadow(top);
        let shadow_video = dom.create_element("video");
        dom.append_child(top_shadow, shadow_video);

        let plain_video = dom.create_element("video");
        dom.append_child(top, plain_video);

        let deep = dom.create_element("div");
        dom.append_child(top, deep);
        let deep_shadow = dom.attach_shadow(deep);
        let deep_video = dom.create_element("video");
        dom.append_child(deep_shadow, deep_video);

        dom.append_child(body, top);

        let found: HashSet<NodeId> = engine.drain_mutations(&mut dom).into_iter().collect();
        let expected: HashSet<NodeId> = [shadow_video, plain_video, deep_video].into();
        assert_eq!(found, expected);
        assert_eq!(engine.player_count(), 3);

        // Nothing pending afterwards.
        assert!(engine.drain_mutations(&mut dom).is_empty());
    }

    #[test]
    fn test_inserted_player_is_registered_once_despite_overlap() {
        let mut dom = DomTree::new();
        let body = dom.create_element("body");
        dom.append_child(dom.root(), body);

        let mut engine = DiscoveryEngine::new();
        engine.scan_and_observe(&mut dom, body);

        // Two records cover the same player: the wrapper insertion and the
        // player insertion inside it.
        let wrapper = dom.create_element("div");
        dom.append_child(body, wrapper);
        let video = dom.create_element("video");
        dom.append_child(wrapper, video);

        assert_eq!(engine.drain_mutations(&mut dom), vec![video]);
        assert_eq!(engine.player_count(), 1);
    }

    #[test]
    fn test_shadow_root_discovered_by_mutation_is_watched_live() {
        let mut dom = DomTree::new();
        let body = dom.create_element("body");
        dom.append_child(dom.root(), body);

        let mut engine = DiscoveryEngine::new();
        engine.scan_and_observe(&mut dom, body);

        let host = dom.create_element("div");
        dom.attach_shadow(host);
        dom.append_child(body, host);
        assert!(engine.drain_mutations(&mut dom).is_empty());

        // A player inserted into that shadow tree later is still found.
        let shadow = dom.shadow_root_of(host);
        let video = dom.create_element("video");
        dom.append_child(shadow, video);
        assert_eq!(engine.drain_mutations(&mut dom), vec![video]);
    }
}
