//! Focus Speech
//!
//! Resolution of focus targets into announcements, and the dispatcher that
//! owns the single in-flight utterance.

mod resolver;
mod dispatcher;

pub use resolver::{
    Inspect, Announcement, AbortReason, resolve_announcement, MAX_ANNOUNCEMENT_CHARS,
};
pub use dispatcher::{SpeechDispatcher, SpeechConfig};

#[cfg(test)]
pub(crate) use dispatcher::testing as dispatcher_testing;
