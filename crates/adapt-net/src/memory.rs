//! In-memory profile backend
//!
//! Stand-in for the REST service when no API is configured. Can be switched
//! offline so every call fails the way a dropped connection would.

use std::cell::{Cell, RefCell};

use adapt_a11y::{AccessibilityProfile, ProfileDraft, ProfileId};

use crate::{NetError, ProfileBackend};

#[derive(Debug, Default)]
pub struct MemoryProfileBackend {
    profiles: RefCell<Vec<AccessibilityProfile>>,
    next_id: Cell<u64>,
    offline: Cell<bool>,
}

impl MemoryProfileBackend {
    pub fn new() -> Self {
        Self { next_id: Cell::new(1), ..Default::default() }
    }

    /// Seed with existing records
    pub fn with_profiles(profiles: Vec<AccessibilityProfile>) -> Self {
        let next = profiles.iter().map(|p| p.profile_id.0).max().unwrap_or(0) + 1;
        Self {
            profiles: RefCell::new(profiles),
            next_id: Cell::new(next),
            offline: Cell::new(false),
        }
    }

    /// Simulate loss of connectivity
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Records currently held
    pub fn len(&self) -> usize {
        self.profiles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_online(&self) -> Result<(), NetError> {
        if self.offline.get() {
            Err(NetError::Network("offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ProfileBackend for MemoryProfileBackend {
    async fn list(&self) -> Result<Vec<AccessibilityProfile>, NetError> {
        self.check_online()?;
        Ok(self.profiles.borrow().clone())
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError> {
        self.check_online()?;
        let id = self.next_id.get().max(1);
        self.next_id.set(id + 1);
        let profile = AccessibilityProfile {
            profile_id: ProfileId(id),
            profile_name: draft.profile_name.clone(),
            description: draft.description.clone(),
            settings: draft.settings,
            created_at: None,
            updated_at: None,
        };
        self.profiles.borrow_mut().push(profile.clone());
        Ok(profile)
    }

    async fn update(&self, id: ProfileId, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError> {
        self.check_online()?;
        let mut profiles = self.profiles.borrow_mut();
        let profile = profiles.iter_mut()
            .find(|p| p.profile_id == id)
            .ok_or(NetError::NotFound(id))?;
        profile.profile_name = draft.profile_name.clone();
        profile.description = draft.description.clone();
        profile.settings = draft.settings;
        Ok(profile.clone())
    }

    async fn delete(&self, id: ProfileId) -> Result<(), NetError> {
        self.check_online()?;
        let mut profiles = self.profiles.borrow_mut();
        let before = profiles.len();
        profiles.retain(|p| p.profile_id != id);
        if profiles.len() == before {
            return Err(NetError::NotFound(id));
        }
        Ok(())
    }
}
