//! DOM Tree (arena-based allocation)
//!
//! Tree construction, shadow root attachment, scoped queries, and subtree
//! mutation watchers. Queries never cross shadow boundaries; a shadow tree
//! is only reachable through its host element's `shadow_root` link.

use crate::{Node, NodeId};

/// A batched insertion notification
#[derive(Debug, Clone)]
pub struct MutationRecord {
    /// Parent the nodes were inserted under
    pub target: NodeId,
    /// Inserted nodes
    pub added: Vec<NodeId>,
}

/// Handle to an installed subtree watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatcherId(usize);

#[derive(Debug)]
struct SubtreeWatcher {
    root: NodeId,
    pending: Vec<MutationRecord>,
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    watchers: Vec<SubtreeWatcher>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            watchers: Vec::new(),
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_string()))
    }

    /// Append a detached node under a parent and notify subtree watchers.
    ///
    /// Appending an already-parented node is ignored (moves would imply
    /// removal, which is not modeled).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            return;
        }
        if self.nodes[child.0 as usize].parent.is_valid() {
            tracing::warn!(?parent, ?child, "append_child: node already has a parent");
            return;
        }

        self.nodes[child.0 as usize].parent = parent;
        self.nodes[parent.0 as usize].children.push(child);

        for watcher in self.watchers.iter_mut() {
            if Self::contains(&self.nodes, watcher.root, parent) {
                watcher.pending.push(MutationRecord {
                    target: parent,
                    added: vec![child],
                });
            }
        }
    }

    // Inclusive ancestor walk. Stops at tree roots: shadow root nodes have no
    // parent, so a watcher outside a shadow tree never matches inside it.
    fn contains(nodes: &[Node], root: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == root {
                return true;
            }
            current = match nodes.get(current.0 as usize) {
                Some(n) => n.parent,
                None => return false,
            };
        }
        false
    }

    /// Attach a shadow root to a host element.
    ///
    /// Returns the existing shadow root if one is already attached, and
    /// NONE if the host is not an element.
    pub fn attach_shadow(&mut self, host: NodeId) -> NodeId {
        let existing = self.shadow_root_of(host);
        if existing.is_valid() {
            return existing;
        }
        if self.get(host).and_then(|n| n.as_element()).is_none() {
            return NodeId::NONE;
        }

        let shadow = self.alloc(Node::shadow_root(host));
        if let Some(elem) = self.nodes[host.0 as usize].as_element_mut() {
            elem.shadow_root = shadow;
        }
        tracing::debug!(?host, ?shadow, "attached shadow root");
        shadow
    }

    /// Shadow root attached to a node (NONE if none, or not an element)
    pub fn shadow_root_of(&self, node: NodeId) -> NodeId {
        self.get(node)
            .and_then(|n| n.as_element())
            .map(|e| e.shadow_root)
            .unwrap_or(NodeId::NONE)
    }

    /// Tag name of a node, if it is an element
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.get(node).and_then(|n| n.as_element()).map(|e| e.tag.as_str())
    }

    /// Check an element's tag name
    pub fn is_tag(&self, node: NodeId, tag: &str) -> bool {
        self.tag(node) == Some(tag)
    }

    /// All nodes beneath `root` in pre-order, excluding `root` itself.
    ///
    /// Does not descend into shadow trees. Non-container nodes yield an
    /// empty result.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(node) = self.get(root) else {
            return out;
        };

        let mut stack: Vec<NodeId> = node.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = self.get(id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    /// All elements with the given tag beneath `root`, excluding `root`.
    ///
    /// Shadow trees are opaque to this query, as they are to the host's
    /// element queries.
    pub fn query_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.is_tag(id, tag))
            .collect()
    }

    /// Check a custom state on an element
    pub fn has_state(&self, node: NodeId, state: &str) -> bool {
        self.get(node)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_state(state))
    }

    /// Add a custom state to an element (ignored for non-elements)
    pub fn add_state(&mut self, node: NodeId, state: &str) {
        if let Some(elem) = self.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.add_state(state);
        }
    }

    /// Remove a custom state from an element (ignored for non-elements)
    pub fn remove_state(&mut self, node: NodeId, state: &str) {
        if let Some(elem) = self.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.remove_state(state);
        }
    }

    /// Install a child-list watcher over the full subtree of `root`.
    ///
    /// Only insertions are reported; removals are not modeled. Records
    /// accumulate until drained with [`take_records`](Self::take_records).
    pub fn watch_subtree(&mut self, root: NodeId) -> WatcherId {
        let id = WatcherId(self.watchers.len());
        self.watchers.push(SubtreeWatcher {
            root,
            pending: Vec::new(),
        });
        tracing::debug!(?root, "watching subtree");
        id
    }

    /// Drain a watcher's pending records
    pub fn take_records(&mut self, watcher: WatcherId) -> Vec<MutationRecord> {
        match self.watchers.get_mut(watcher.0) {
            Some(w) => std::mem::take(&mut w.pending),
            None => Vec::new(),
        }
    }

    /// Check whether any watcher has pending records
    pub fn has_pending_records(&self) -> bool {
        self.watchers.iter().any(|w| !w.pending.is_empty())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
