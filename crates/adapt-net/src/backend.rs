//! Profile backend capability

use adapt_a11y::{AccessibilityProfile, ProfileDraft, ProfileId};

use crate::NetError;

/// Fallible, asynchronous profile persistence
///
/// Futures are driven on the UI thread's executor and need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait ProfileBackend {
    async fn list(&self) -> Result<Vec<AccessibilityProfile>, NetError>;

    async fn create(&self, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError>;

    async fn update(&self, id: ProfileId, draft: &ProfileDraft) -> Result<AccessibilityProfile, NetError>;

    async fn delete(&self, id: ProfileId) -> Result<(), NetError>;
}
