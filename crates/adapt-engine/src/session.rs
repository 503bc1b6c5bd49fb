//! Adaptation Session
//!
//! Owns the live settings for one page. Every change is reconciled onto the
//! document root before the call returns, the screen reader is driven only
//! when its toggle actually flips, and the result is persisted locally.
//! All root class writes go through the reconciler.

use adapt_a11y::reconciler::{self, ReconcileReport};
use adapt_a11y::{
    create_speech_device, AccessibilityProfile, AccessibilitySettings, ScreenReaderController,
    SettingsAxis, SpeechDispatcher,
};
use adapt_dom::Window;
use adapt_net::ProfileBackend;

use crate::{ConfiguredBackend, EngineConfig, EngineError, KeyValueStore, ProfileStore, SettingsStorage};

/// Live accessibility state of one page
#[derive(Debug)]
pub struct Session<S, B> {
    settings: AccessibilitySettings,
    storage: SettingsStorage<S>,
    screen_reader: ScreenReaderController,
    profiles: ProfileStore<B>,
}

impl<S: KeyValueStore> Session<S, ConfiguredBackend> {
    /// Wire a session from configuration, using the platform speech device
    pub fn from_config(config: &EngineConfig, store: S) -> Result<Self, EngineError> {
        let dispatcher = SpeechDispatcher::new(create_speech_device(), config.speech.clone());
        let backend = ConfiguredBackend::from_config(config)?;
        Ok(Self::new(
            SettingsStorage::new(store, config.storage_key.clone()),
            dispatcher,
            ProfileStore::new(backend),
        ))
    }
}

impl<S: KeyValueStore, B: ProfileBackend> Session<S, B> {
    pub fn new(storage: SettingsStorage<S>, dispatcher: SpeechDispatcher, profiles: ProfileStore<B>) -> Self {
        Self {
            settings: AccessibilitySettings::default(),
            storage,
            screen_reader: ScreenReaderController::new(dispatcher),
            profiles,
        }
    }

    pub fn settings(&self) -> &AccessibilitySettings { &self.settings }
    pub fn storage(&self) -> &SettingsStorage<S> { &self.storage }
    pub fn screen_reader(&self) -> &ScreenReaderController { &self.screen_reader }
    pub fn profiles(&self) -> &ProfileStore<B> { &self.profiles }
    pub fn profiles_mut(&mut self) -> &mut ProfileStore<B> { &mut self.profiles }

    /// Restore persisted settings and bring the page in line with them
    pub fn start(&mut self, window: &mut Window) -> ReconcileReport {
        self.settings = self.storage.load();
        let report = reconciler::reconcile(&mut window.document, &self.settings);
        self.screen_reader.set_enabled(window, self.settings.screen_reader);
        tracing::info!(
            default = self.settings.is_default(),
            tokens = report.added.len(),
            screen_reader = self.settings.screen_reader,
            "accessibility session started"
        );
        report
    }

    /// Mutate the settings and apply the result.
    ///
    /// The document and screen reader reflect the new settings even when
    /// persisting them fails.
    pub fn update(
        &mut self,
        window: &mut Window,
        mutate: impl FnOnce(&mut AccessibilitySettings),
    ) -> Result<ReconcileReport, EngineError> {
        let previous = self.settings;
        mutate(&mut self.settings);
        self.commit(window, previous)
    }

    /// Advance one axis (toggles flip)
    pub fn cycle(&mut self, window: &mut Window, axis: SettingsAxis) -> Result<ReconcileReport, EngineError> {
        self.update(window, |s| s.cycle(axis))
    }

    /// Merge a fetched profile into the live settings
    pub fn apply_profile(
        &mut self,
        window: &mut Window,
        profile: &AccessibilityProfile,
    ) -> Result<ReconcileReport, EngineError> {
        tracing::info!(id = %profile.profile_id, name = %profile.profile_name, "applying profile");
        self.update(window, |s| ProfileStore::<B>::apply(profile, s))
    }

    pub fn reset(&mut self, window: &mut Window) -> Result<ReconcileReport, EngineError> {
        self.update(window, AccessibilitySettings::reset)
    }

    /// Release the focus listener and silence speech. Root classes stay.
    pub fn end(&mut self, window: &mut Window) {
        self.screen_reader.teardown(window);
        tracing::info!("accessibility session ended");
    }

    fn commit(&mut self, window: &mut Window, previous: AccessibilitySettings) -> Result<ReconcileReport, EngineError> {
        let report = reconciler::reconcile(&mut window.document, &self.settings);
        if previous.screen_reader != self.settings.screen_reader {
            self.screen_reader.set_enabled(window, self.settings.screen_reader);
        }
        tracing::debug!(changed = ?previous.changed_axes(&self.settings), "settings applied");
        self.storage.save(&self.settings)?;
        Ok(report)
    }
}
