//! Speech Dispatcher
//!
//! Sole writer to the speech device. Every `speak` cancels whatever is queued
//! or playing first, so at most one utterance is ever in flight and the most
//! recent request wins.

use serde::Deserialize;

use super::MAX_ANNOUNCEMENT_CHARS;
use crate::platform::{SpeechSynthesis, Utterance};

/// Speech parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// BCP 47 locale of every utterance
    pub locale: String,
    /// Speaking rate, 1.0 = normal
    pub rate: f32,
    /// Longest announcement, in characters
    pub max_chars: usize,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            locale: "ko-KR".to_string(),
            rate: 1.0,
            max_chars: MAX_ANNOUNCEMENT_CHARS,
        }
    }
}

/// Owner of the shared speech device
pub struct SpeechDispatcher {
    device: Option<Box<dyn SpeechSynthesis>>,
    config: SpeechConfig,
    last_spoken: Option<String>,
    issued: u64,
}

impl std::fmt::Debug for SpeechDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechDispatcher")
            .field("device", &self.device.as_ref().map(|d| d.name()))
            .field("config", &self.config)
            .field("last_spoken", &self.last_spoken)
            .field("issued", &self.issued)
            .finish()
    }
}

impl SpeechDispatcher {
    /// `None` device means speech is unavailable; every call becomes a no-op
    pub fn new(device: Option<Box<dyn SpeechSynthesis>>, config: SpeechConfig) -> Self {
        Self { device, config, last_spoken: None, issued: 0 }
    }

    /// Dispatcher with no device
    pub fn silent(config: SpeechConfig) -> Self {
        Self::new(None, config)
    }

    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }

    pub fn is_available(&self) -> bool {
        self.device.as_ref().is_some_and(|d| d.is_available())
    }

    /// Cancel-then-speak. Returns true if an utterance was queued.
    pub fn speak(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let len = text.chars().count();
        if len > self.config.max_chars {
            tracing::debug!(len, max = self.config.max_chars, "announcement over ceiling dropped");
            return false;
        }
        let Some(device) = self.device.as_mut() else {
            return false;
        };

        device.cancel();
        let utterance = Utterance {
            text: text.to_string(),
            lang: self.config.locale.clone(),
            rate: self.config.rate,
        };
        match device.speak(&utterance) {
            Ok(()) => {
                self.issued += 1;
                self.last_spoken = Some(utterance.text);
                tracing::debug!(text, "speaking");
                true
            }
            Err(err) => {
                tracing::warn!(%err, "speech device rejected utterance");
                false
            }
        }
    }

    /// Cancel anything queued or playing
    pub fn cancel(&mut self) {
        if let Some(device) = self.device.as_mut() {
            device.cancel();
        }
    }

    /// Text of the most recent successful `speak`
    pub fn last_spoken(&self) -> Option<&str> {
        self.last_spoken.as_deref()
    }

    /// Number of utterances queued so far
    pub fn utterances_issued(&self) -> u64 {
        self.issued
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::testing::RecordingDevice;

    fn dispatcher() -> (SpeechDispatcher, RecordingDevice) {
        let device = RecordingDevice::default();
        let d = SpeechDispatcher::new(Some(Box::new(device.clone())), SpeechConfig::default());
        (d, device)
    }

    #[test]
    fn test_last_request_wins() {
        let (mut d, device) = dispatcher();
        assert!(d.speak("배송지 추가"));
        assert!(d.speak("결제하기"));

        let log = device.0.borrow();
        assert_eq!(log.queue.len(), 1);
        assert_eq!(log.queue[0].text, "결제하기");
        assert_eq!(log.queue[0].lang, "ko-KR");
        assert_eq!(log.cancels, 2);
        assert_eq!(d.utterances_issued(), 2);
        assert_eq!(d.last_spoken(), Some("결제하기"));
    }

    #[test]
    fn test_blank_is_noop() {
        let (mut d, device) = dispatcher();
        assert!(!d.speak("   \n"));
        assert_eq!(device.0.borrow().cancels, 0);
    }

    #[test]
    fn test_over_ceiling_is_noop() {
        let (mut d, device) = dispatcher();
        assert!(!d.speak(&"x".repeat(MAX_ANNOUNCEMENT_CHARS + 1)));
        assert!(device.0.borrow().spoken.is_empty());
    }

    #[test]
    fn test_no_device() {
        let mut d = SpeechDispatcher::silent(SpeechConfig::default());
        assert!(!d.is_available());
        assert!(!d.speak("hello"));
        d.cancel();
        assert_eq!(d.utterances_issued(), 0);
    }
}
