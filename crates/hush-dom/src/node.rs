//! DOM Node
//!
//! Node data for documents, elements, text, and shadow roots.

use crate::NodeId;

/// DOM Node - core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// Child nodes in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a document node
    pub fn document() -> Self {
        Self {
            parent: NodeId::NONE,
            children: Vec::new(),
            data: NodeData::Document,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self {
            parent: NodeId::NONE,
            children: Vec::new(),
            data: NodeData::Element(ElementData::new(tag)),
        }
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self {
            parent: NodeId::NONE,
            children: Vec::new(),
            data: NodeData::Text(content),
        }
    }

    /// Create a shadow root node for the given host element
    pub fn shadow_root(host: NodeId) -> Self {
        Self {
            parent: NodeId::NONE,
            children: Vec::new(),
            data: NodeData::ShadowRoot { host },
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this node roots a tree (document or shadow root)
    #[inline]
    pub fn is_tree_root(&self) -> bool {
        matches!(self.data, NodeData::Document | NodeData::ShadowRoot { .. })
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Encapsulated sub-tree root attached to a host element
    ShadowRoot { host: NodeId },
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name, lowercase
    pub tag: String,
    /// Attributes in set order
    pub attrs: Vec<Attribute>,
    /// Attached shadow root (NONE if never attached)
    pub shadow_root: NodeId,
    /// Custom states, namespaced apart from attributes
    custom_states: Vec<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            shadow_root: NodeId::NONE,
            custom_states: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Check a custom state
    pub fn has_state(&self, state: &str) -> bool {
        self.custom_states.iter().any(|s| s == state)
    }

    /// Add a custom state (no-op if already set)
    pub fn add_state(&mut self, state: &str) {
        if !self.has_state(state) {
            self.custom_states.push(state.to_string());
        }
    }

    /// Remove a custom state (no-op if absent)
    pub fn remove_state(&mut self, state: &str) {
        self.custom_states.retain(|s| s != state);
    }
}

/// Attribute
#[derive(Debug)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}
