//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with the basic html/body structure
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let body = tree.create_element("body");
        tree.append_child(tree.root(), html);
        tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            body_element: body,
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let doc = Document::new();
        assert!(doc.tree().is_tag(doc.document_element(), "html"));
        assert!(doc.tree().is_tag(doc.body(), "body"));
        assert_eq!(
            doc.tree().get(doc.body()).unwrap().parent,
            doc.document_element()
        );
    }
}
