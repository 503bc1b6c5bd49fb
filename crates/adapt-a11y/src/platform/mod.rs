//! Platform Speech Integration
//!
//! Abstraction over the platform's speech synthesizer. The engine only ever
//! needs two operations: drop everything queued or playing, and queue one
//! new utterance.

mod linux;

pub use linux::SpdSayDevice;

use crate::A11yError;

/// One unit of synthesized speech
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// BCP 47 locale, e.g. `ko-KR`
    pub lang: String,
    /// 1.0 is the platform's normal rate
    pub rate: f32,
}

/// Platform speech synthesizer
pub trait SpeechSynthesis {
    /// Cancel every utterance queued or playing
    fn cancel(&mut self);

    /// Queue an utterance
    fn speak(&mut self, utterance: &Utterance) -> Result<(), A11yError>;

    /// Whether the synthesizer can currently produce speech
    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str;
}

/// Detect the platform synthesizer, if any
pub fn create_speech_device() -> Option<Box<dyn SpeechSynthesis>> {
    #[cfg(target_os = "linux")]
    {
        if let Some(device) = SpdSayDevice::detect() {
            tracing::info!(device = device.name(), "speech device detected");
            return Some(Box::new(device));
        }
    }
    tracing::info!("no speech device available; spoken feedback disabled");
    None
}
