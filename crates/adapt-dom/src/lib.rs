//! Adapt DOM - Document Object Model
//!
//! Arena-backed document tree used by the accessibility adaptation engine.
//! Exposes exactly the surface the engine consumes: the document root class
//! list, element attributes and visible text, and a window-level focus
//! listener registry.

mod node;
mod tree;
mod document;
mod classlist;
mod events;

pub use node::{Node, NodeData, ElementData, Attribute};
pub use tree::DomTree;
pub use document::Document;
pub use classlist::DOMTokenList;
pub use events::{Window, EventType, ListenerId, ListenerOptions, FocusEvent, FocusHandler};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Invalid node id: {0:?}")]
    InvalidNode(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Cannot append {child:?} under {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
