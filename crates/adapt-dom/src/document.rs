//! Document - High-level document API

use crate::{DomTree, NodeId, DomError, ElementData, DOMTokenList};

/// HTML Document with the usual `<html><head/><body/></html>` skeleton
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with html/head/body
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh, detached nodes under valid parents; cannot fail.
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Get <html> element (the document root element)
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Create an element under `parent` with the given attributes
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId, DomError> {
        let id = self.tree.create_element(tag);
        if let Some(el) = self.tree.get_mut(id).and_then(|n| n.as_element_mut()) {
            for (name, value) in attrs {
                el.set_attr(name, *value);
            }
        }
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Create a text node under `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DomError> {
        let id = self.tree.create_text(text);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Element data for `id`
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.get(id).and_then(|n| n.as_element())
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        let node = self.tree.get_mut(id).ok_or(DomError::InvalidNode(id))?;
        node.as_element_mut().ok_or(DomError::NotAnElement(id))
    }

    /// Lowercased tag name, None for non-elements
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(|n| n.is_text())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    /// Get attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    /// Set attribute value
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Element class list
    pub fn class_list(&self, id: NodeId) -> Option<&DOMTokenList> {
        self.element(id).map(|e| &e.classes)
    }

    /// Mutable element class list.
    ///
    /// Accessibility tokens on the document element are rewritten wholesale by
    /// the accessibility reconciler; edits to them here do not persist.
    pub fn class_list_mut(&mut self, id: NodeId) -> Result<&mut DOMTokenList, DomError> {
        Ok(&mut self.element_mut(id)?.classes)
    }

    /// Text content of a node (descendant text, or the text itself)
    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree.find(self.tree.root(), &|node| {
            node.as_element().and_then(|e| e.get_attr("id")) == Some(id)
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
