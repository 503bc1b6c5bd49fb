//! Speech Resolver
//!
//! Given the node that just received focus, pick the single label worth
//! announcing, or decide to stay silent. The walk is written against the
//! [`Inspect`] capability so it runs on any tree that can answer a handful of
//! read-only questions.

use adapt_dom::{Document, NodeId};

use crate::aria::{self, AriaRole, ARIA_LABEL, ARIA_LABELLEDBY, ROLE};

/// Default announcement ceiling, in characters
pub const MAX_ANNOUNCEMENT_CHARS: usize = 100;

/// Read-only view of a document tree
pub trait Inspect {
    type Node: Copy + PartialEq;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn is_text(&self, node: Self::Node) -> bool;
    /// Lowercase tag name, None for non-elements
    fn tag_name(&self, node: Self::Node) -> Option<&str>;
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;
    /// Rendered text of the node and its descendants
    fn visible_text(&self, node: Self::Node) -> String;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// The document node, `<html>` or `<body>`
    fn is_page_root(&self, node: Self::Node) -> bool;

    /// Nearest inclusive ancestor satisfying `pred`
    fn closest(&self, node: Self::Node, pred: &dyn Fn(&Self, Self::Node) -> bool) -> Option<Self::Node> {
        let mut current = Some(node);
        while let Some(n) = current {
            if pred(self, n) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }
}

impl Inspect for Document {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Document::parent(self, node)
    }

    fn is_text(&self, node: NodeId) -> bool {
        Document::is_text(self, node)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        Document::tag_name(self, node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get_attribute(node, name)
    }

    fn visible_text(&self, node: NodeId) -> String {
        self.text_content(node)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn is_page_root(&self, node: NodeId) -> bool {
        node == self.tree.root() || node == self.document_element() || node == self.body()
    }
}

/// Why nothing was announced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Focus landed on the page itself
    PageRoot,
    /// No rule produced any text
    NoText,
    /// Resolved text is over the ceiling; carries its length in characters
    TooLong(usize),
}

/// Resolver verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    Speak(String),
    Abort(AbortReason),
}

impl Announcement {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Speak(text) => Some(text),
            Self::Abort(_) => None,
        }
    }
}

/// Resolve what to announce for a focus event on `target`
pub fn resolve_announcement<D: Inspect + ?Sized>(
    dom: &D,
    target: D::Node,
    max_chars: usize,
) -> Announcement {
    let origin = if dom.is_text(target) {
        match dom.parent(target) {
            Some(parent) => parent,
            None => return Announcement::Abort(AbortReason::NoText),
        }
    } else {
        target
    };

    let element = dom.closest(origin, &|d, n| is_labelled_or_interactive(d, n)).unwrap_or(origin);
    if dom.is_page_root(element) {
        return Announcement::Abort(AbortReason::PageRoot);
    }

    let Some(text) = label_text(dom, element) else {
        return Announcement::Abort(AbortReason::NoText);
    };

    let len = text.chars().count();
    if len > max_chars {
        return Announcement::Abort(AbortReason::TooLong(len));
    }
    Announcement::Speak(text)
}

fn role_of<D: Inspect + ?Sized>(dom: &D, node: D::Node) -> Option<AriaRole> {
    dom.attribute(node, ROLE).and_then(AriaRole::parse)
}

fn is_labelled_or_interactive<D: Inspect + ?Sized>(dom: &D, node: D::Node) -> bool {
    dom.attribute(node, ARIA_LABEL).is_some()
        || dom.attribute(node, ARIA_LABELLEDBY).is_some()
        || dom.tag_name(node).is_some_and(aria::is_native_control)
        || role_of(dom, node).is_some_and(|r| r.is_widget())
}

/// Ordered text rules; the first to yield non-empty text wins
fn label_text<D: Inspect + ?Sized>(dom: &D, el: D::Node) -> Option<String> {
    let attr = |name: &str| dom.attribute(el, name).and_then(non_empty);

    attr(ARIA_LABEL)
        .or_else(|| labelled_by_text(dom, el))
        .or_else(|| {
            role_of(dom, el)
                .filter(AriaRole::is_option_like)
                .and_then(|_| non_empty(&dom.visible_text(el)))
        })
        .or_else(|| {
            let is_image = dom.tag_name(el) == Some("img") || role_of(dom, el) == Some(AriaRole::Img);
            if is_image { attr("alt") } else { None }
        })
        .or_else(|| non_empty(&dom.visible_text(el)))
        .or_else(|| attr("value"))
        .or_else(|| if dom.tag_name(el) == Some("input") { attr("placeholder") } else { None })
}

fn labelled_by_text<D: Inspect + ?Sized>(dom: &D, el: D::Node) -> Option<String> {
    let ids = dom.attribute(el, ARIA_LABELLEDBY)?;
    let joined = ids.split_whitespace()
        .filter_map(|id| dom.element_by_id(id))
        .map(|node| dom.visible_text(node))
        .collect::<Vec<_>>()
        .join(" ");
    non_empty(&joined)
}

/// Collapse whitespace runs and trim; None if nothing is left
fn non_empty(text: &str) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}
