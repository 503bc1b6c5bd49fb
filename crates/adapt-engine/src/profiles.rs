//! Profile Store
//!
//! Remote CRUD over accessibility profiles with a locally cached list.
//! A successful mutation invalidates the cache and refetches it; a failed
//! one leaves the cache exactly as it was.

use adapt_a11y::{AccessibilityProfile, AccessibilitySettings, ProfileDraft, ProfileId};
use adapt_net::{HttpProfileBackend, MemoryProfileBackend, NetError, ProfileBackend};

use crate::{EngineConfig, EngineError};

/// Cached view over a [`ProfileBackend`]
#[derive(Debug)]
pub struct ProfileStore<B> {
    backend: B,
    cache: Option<Vec<AccessibilityProfile>>,
}

impl<B: ProfileBackend> ProfileStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, cache: None }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Last successfully fetched list
    pub fn cached(&self) -> Option<&[AccessibilityProfile]> {
        self.cache.as_deref()
    }

    /// Look up a cached profile
    pub fn find(&self, id: ProfileId) -> Option<&AccessibilityProfile> {
        self.cache.as_ref()?.iter().find(|p| p.profile_id == id)
    }

    /// Fetch the list and replace the cache
    pub async fn list(&mut self) -> Result<&[AccessibilityProfile], EngineError> {
        let profiles = self.backend.list().await?;
        Ok(self.cache.insert(profiles).as_slice())
    }

    pub async fn create(&mut self, draft: &ProfileDraft) -> Result<AccessibilityProfile, EngineError> {
        let created = self.backend.create(draft).await?;
        tracing::info!(id = %created.profile_id, name = %created.profile_name, "profile created");
        self.refresh().await;
        Ok(created)
    }

    pub async fn update(&mut self, id: ProfileId, draft: &ProfileDraft) -> Result<AccessibilityProfile, EngineError> {
        let updated = self.backend.update(id, draft).await?;
        tracing::info!(%id, "profile updated");
        self.refresh().await;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: ProfileId) -> Result<(), EngineError> {
        self.backend.delete(id).await?;
        tracing::info!(%id, "profile deleted");
        self.refresh().await;
        Ok(())
    }

    /// Merge a profile's present axes into `settings`. Purely local.
    pub fn apply(profile: &AccessibilityProfile, settings: &mut AccessibilitySettings) {
        profile.settings.apply_to(settings);
    }

    // The mutation already succeeded, so a failed refetch only drops the
    // now-stale cache.
    async fn refresh(&mut self) {
        self.cache = None;
        match self.backend.list().await {
            Ok(profiles) => self.cache = Some(profiles),
            Err(e) => tracing::warn!(error = %e, "profile list refresh failed; cache invalidated"),
        }
    }
}

/// Backend chosen by [`EngineConfig::api`]
#[derive(Debug)]
pub enum ConfiguredBackend {
    Http(HttpProfileBackend),
    Memory(MemoryProfileBackend),
}

impl ConfiguredBackend {
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let Some(base_url) = config.api.base_url.as_deref() else {
            tracing::info!("no profile API configured; profiles kept in memory");
            return Ok(Self::Memory(MemoryProfileBackend::new()));
        };
        let mut backend = HttpProfileBackend::new(base_url, config.api.timeout())?;
        if let Some(token) = &config.api.bearer_token {
            backend = backend.with_bearer_token(token.clone());
        }
        tracing::info!(base = %backend.base_url(), "profile API configured");
        Ok(Self::Http(backend))
    }
}

impl ProfileBackend for ConfiguredBackend {
    async fn list(&self) -> Result<Vec<AccessibilityProfile>, NetError> {
        match self {
            Self::Http(b) => b.list().await,
            Self::Memory(b) => b.list().await,
        }
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError> {
        match self {
            Self::Http(b) => b.create(draft).await,
            Self::Memory(b) => b.create(draft).await,
        }
    }

    async fn update(&self, id: ProfileId, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError> {
        match self {
            Self::Http(b) => b.update(id, draft).await,
            Self::Memory(b) => b.update(id, draft).await,
        }
    }

    async fn delete(&self, id: ProfileId) -> Result<(), NetError> {
        match self {
            Self::Http(b) => b.delete(id).await,
            Self::Memory(b) => b.delete(id).await,
        }
    }
}
