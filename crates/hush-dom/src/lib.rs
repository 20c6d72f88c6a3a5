//! Hush DOM - Host document model
//!
//! Arena-allocated document tree with shadow roots, element custom state,
//! and subtree mutation watchers.

mod document;
mod geometry;
mod node;
mod tree;

pub use document::Document;
pub use geometry::Rect;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{DomTree, MutationRecord, WatcherId};

/// Node identifier (index into the tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this refers to a real node
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }

    /// Construct from a raw arena index
    pub fn from_raw(index: u32) -> Self {
        NodeId(index)
    }
}
