//! Adapt Accessibility
//!
//! Accessibility adaptation for a storefront document.
//!
//! Features:
//! - Enumerated, normalized settings model with wrapping cycles
//! - Pure per-axis class mapping
//! - Clear-then-rebuild reconciliation of document root classes
//! - Focus-driven label resolution over an inspectable tree
//! - Cancel-then-speak dispatcher owning the speech device
//! - Screen reader controller bound to the settings toggle
//! - Partial settings profiles

pub mod settings;
pub mod class_map;
pub mod reconciler;
pub mod aria;
pub mod speech;
pub mod platform;
pub mod screen_reader;
pub mod profile;

pub use settings::{
    AccessibilitySettings, ContrastLevel, Magnitude, TextAlign, SettingsAxis, Cycle,
    CONTRAST_LEVELS, TEXT_SIZE_LEVELS, TEXT_SPACING_LEVELS, LINE_HEIGHT_LEVELS,
};
pub use class_map::{class_tokens, RESERVED_PREFIX, DARK_ALIAS};
pub use reconciler::{reconcile, RootClassList, ReconcileReport};
pub use aria::AriaRole;
pub use speech::{
    Inspect, Announcement, AbortReason, resolve_announcement, SpeechDispatcher, SpeechConfig,
    MAX_ANNOUNCEMENT_CHARS,
};
pub use platform::{SpeechSynthesis, Utterance, SpdSayDevice, create_speech_device};
pub use screen_reader::ScreenReaderController;
pub use profile::{AccessibilityProfile, ProfileDraft, ProfileId, ProfileSettings};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("{axis} level {value} out of range")]
    LevelOutOfRange { axis: &'static str, value: u8 },

    #[error("Unknown text alignment: {0}")]
    UnknownAlign(String),

    #[error("Speech device error: {0}")]
    Speech(String),
}
