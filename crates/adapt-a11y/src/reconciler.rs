//! DOM Reconciler
//!
//! Keeps the document root's class set in exact correspondence with the
//! settings. Every pass strips all engine-owned tokens and rebuilds them from
//! scratch, so no token from a previous state can survive.
//!
//! [`reconcile`] and [`clear`] are the only writers of engine-owned tokens on
//! the root, and they reach it only through [`RootClassList`]. An engine token
//! written there by anything else is dropped on the next pass.

use adapt_dom::Document;

use crate::class_map::{self, is_engine_token};
use crate::settings::AccessibilitySettings;

/// Write access to the document root's class list.
///
/// Implemented by documents; called only by [`reconcile`] and [`clear`].
pub trait RootClassList {
    /// Remove every root token matching `pred`, returning what was removed
    fn remove_root_tokens(&mut self, pred: &dyn Fn(&str) -> bool) -> Vec<String>;

    /// Add a token; false if it was already present
    fn add_root_token(&mut self, token: &str) -> bool;

    /// Current root tokens, in order
    fn root_tokens(&self) -> Vec<String>;
}

impl RootClassList for Document {
    fn remove_root_tokens(&mut self, pred: &dyn Fn(&str) -> bool) -> Vec<String> {
        let root = self.document_element();
        match self.class_list_mut(root) {
            Ok(list) => list.remove_where(pred),
            Err(err) => {
                tracing::warn!(%err, "document root has no class list");
                Vec::new()
            }
        }
    }

    fn add_root_token(&mut self, token: &str) -> bool {
        let root = self.document_element();
        self.class_list_mut(root).map(|list| list.add(token)).unwrap_or(false)
    }

    fn root_tokens(&self) -> Vec<String> {
        self.class_list(self.document_element())
            .map(|list| list.iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Outcome of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Engine tokens stripped before rebuilding
    pub removed: Vec<String>,
    /// Tokens added for the current settings
    pub added: Vec<&'static str>,
}

/// Clear-then-rebuild the engine's tokens on the document root
pub fn reconcile(root: &mut impl RootClassList, settings: &AccessibilitySettings) -> ReconcileReport {
    let removed = root.remove_root_tokens(&is_engine_token);
    let added = class_map::class_tokens(settings);
    for token in &added {
        root.add_root_token(token);
    }
    tracing::debug!(?removed, ?added, "reconciled root classes");
    ReconcileReport { removed, added }
}

/// Strip every engine token without adding any
pub fn clear(root: &mut impl RootClassList) -> Vec<String> {
    let removed = root.remove_root_tokens(&is_engine_token);
    tracing::debug!(?removed, "cleared root classes");
    removed
}
