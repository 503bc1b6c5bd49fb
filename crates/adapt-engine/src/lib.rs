//! Adapt Engine
//!
//! Accessibility adaptation for a storefront page: a settings model whose
//! every change is reflected synchronously on the document root's classes,
//! an optional focus-driven screen reader, and named settings profiles kept
//! by a remote service.
//!
//! # Example
//! ```rust,ignore
//! use adapt_engine::{EngineConfig, MemoryStore, Session, SettingsAxis};
//! use adapt_engine::dom::Window;
//!
//! let config = EngineConfig::default();
//! let mut window = Window::default();
//! let mut session = Session::from_config(&config, MemoryStore::new())?;
//! session.start(&mut window);
//! session.cycle(&mut window, SettingsAxis::Contrast)?;
//! ```

mod config;
mod storage;
mod profiles;
mod session;

pub use config::{EngineConfig, ApiConfig};
pub use storage::{KeyValueStore, MemoryStore, FileStore, SettingsStorage};
pub use profiles::{ProfileStore, ConfiguredBackend};
pub use session::Session;

pub use adapt_a11y::{
    AccessibilitySettings, AccessibilityProfile, ContrastLevel, Magnitude, TextAlign, SettingsAxis,
    ProfileDraft, ProfileId, ProfileSettings, ReconcileReport, SpeechConfig, SpeechDispatcher,
};

// Re-export sub-crates for advanced usage
pub use adapt_dom as dom;
pub use adapt_a11y as a11y;
pub use adapt_net as net;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Net(#[from] adapt_net::NetError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
