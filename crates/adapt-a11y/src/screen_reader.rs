//! Screen Reader Controller
//!
//! Two states: Disabled (no listener) and Listening (exactly one window-level
//! focus-capture listener). While listening, every focus event is resolved
//! into an announcement and handed to the speech dispatcher.

use std::cell::RefCell;
use std::rc::Rc;

use adapt_dom::{EventType, FocusEvent, ListenerId, ListenerOptions, Window};

use crate::speech::{resolve_announcement, Announcement, SpeechDispatcher};

/// Focus-driven announcer bound to the screen reader toggle
#[derive(Debug)]
pub struct ScreenReaderController {
    dispatcher: Rc<RefCell<SpeechDispatcher>>,
    listener: Option<ListenerId>,
}

impl ScreenReaderController {
    pub fn new(dispatcher: SpeechDispatcher) -> Self {
        Self { dispatcher: Rc::new(RefCell::new(dispatcher)), listener: None }
    }

    /// Shared handle to the dispatcher
    pub fn dispatcher(&self) -> Rc<RefCell<SpeechDispatcher>> {
        Rc::clone(&self.dispatcher)
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn listener_id(&self) -> Option<ListenerId> {
        self.listener
    }

    /// Drive the state machine from the screen reader toggle.
    /// Returns true if the state changed.
    pub fn set_enabled(&mut self, window: &mut Window, enabled: bool) -> bool {
        if enabled { self.enable(window) } else { self.disable(window) }
    }

    /// Disabled -> Listening. No-op if a live listener is already attached.
    pub fn enable(&mut self, window: &mut Window) -> bool {
        if let Some(id) = self.listener {
            if window.is_registered(id) {
                return false;
            }
            // Handle went stale (window rebuilt); attach afresh.
            self.listener = None;
        }

        let dispatcher = Rc::clone(&self.dispatcher);
        let handler = Rc::new(move |event: &FocusEvent<'_>| {
            on_focus(&dispatcher, event);
        });
        let id = window.add_event_listener(EventType::Focus, ListenerOptions::capture(), handler);
        self.listener = Some(id);
        tracing::info!(?id, "screen reader listening");
        true
    }

    /// Listening -> Disabled: silence speech, then detach
    pub fn disable(&mut self, window: &mut Window) -> bool {
        let Some(id) = self.listener.take() else {
            return false;
        };
        self.cancel_speech();
        window.remove_event_listener(id);
        tracing::info!(?id, "screen reader disabled");
        true
    }

    /// Session end: release the listener regardless of state
    pub fn teardown(&mut self, window: &mut Window) {
        if !self.disable(window) {
            self.cancel_speech();
        }
    }

    fn cancel_speech(&self) {
        match self.dispatcher.try_borrow_mut() {
            Ok(mut d) => d.cancel(),
            Err(_) => tracing::warn!("speech dispatcher busy; cancel skipped"),
        }
    }
}

fn on_focus(dispatcher: &RefCell<SpeechDispatcher>, event: &FocusEvent<'_>) {
    let Ok(mut d) = dispatcher.try_borrow_mut() else {
        tracing::warn!("re-entrant focus event ignored");
        return;
    };
    let max_chars = d.config().max_chars;
    match resolve_announcement(event.document, event.target, max_chars) {
        Announcement::Speak(text) => {
            d.speak(&text);
        }
        Announcement::Abort(reason) => {
            tracing::debug!(?reason, target = ?event.target, "focus announcement aborted");
        }
    }
}
