//! Window Events
//!
//! Window-level listener registry for focus events. Listeners are keyed by a
//! `ListenerId` handed out on registration so the owner can detach exactly
//! what it attached.

use std::fmt;
use std::rc::Rc;

use crate::{Document, NodeId};

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Focus,
}

impl EventType {
    /// Focus events do not bubble; window listeners only see them in the capture phase
    pub fn bubbles(&self) -> bool {
        !matches!(self, EventType::Focus)
    }
}

/// Listener options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub capture: bool,
}

impl ListenerOptions {
    pub fn capture() -> Self {
        Self { capture: true }
    }
}

/// Registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Focus event delivered to window listeners
#[derive(Debug, Clone, Copy)]
pub struct FocusEvent<'a> {
    pub event_type: EventType,
    /// Originating target; may be a text node
    pub target: NodeId,
    pub document: &'a Document,
}

/// Focus listener callback
pub type FocusHandler = Rc<dyn Fn(&FocusEvent<'_>)>;

struct Registered {
    id: ListenerId,
    event_type: EventType,
    options: ListenerOptions,
    handler: FocusHandler,
}

impl fmt::Debug for Registered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registered")
            .field("id", &self.id)
            .field("event_type", &self.event_type)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Browsing context: the document plus window-level listeners
#[derive(Debug, Default)]
pub struct Window {
    pub document: Document,
    listeners: Vec<Registered>,
    next_id: u64,
}

impl Window {
    pub fn new(document: Document) -> Self {
        Self { document, listeners: Vec::new(), next_id: 0 }
    }

    /// Register a listener and return its handle
    pub fn add_event_listener(
        &mut self,
        event_type: EventType,
        options: ListenerOptions,
        handler: FocusHandler,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Registered { id, event_type, options, handler });
        tracing::debug!(?id, ?event_type, capture = options.capture, "window listener added");
        id
    }

    /// Deregister by handle. Returns false if the handle was not registered.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(?id, "window listener removed");
        }
        removed
    }

    /// Number of listeners registered for `event_type`
    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.listeners.iter().filter(|l| l.event_type == event_type).count()
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    /// Move focus to `target` and notify focus listeners.
    ///
    /// Focus does not bubble, so only capture-phase window listeners fire.
    /// Returns the number of handlers invoked.
    pub fn dispatch_focus(&self, target: NodeId) -> usize {
        let handlers: Vec<FocusHandler> = self.listeners.iter()
            .filter(|l| l.event_type == EventType::Focus)
            .filter(|l| l.options.capture || EventType::Focus.bubbles())
            .map(|l| Rc::clone(&l.handler))
            .collect();

        let event = FocusEvent { event_type: EventType::Focus, target, document: &self.document };
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }
}
