//! Reveal tracking for the ticket collection
//!
//! The collection is intentionally ephemeral: it lives in memory only and
//! resets on reload. Only the authentication session is persisted.

use crate::catalog::Catalog;
use std::collections::BTreeSet;

/// Set of ticket ids the user has revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    revealed: BTreeSet<String>,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reveal. Idempotent: returns `true` only when the id was not
    /// already in the set.
    pub fn mark_revealed(&mut self, id: &str) -> bool {
        self.revealed.insert(id.to_string())
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Clear the revealed set, restarting the experience.
    pub fn reset(&mut self) {
        self.revealed.clear();
    }

    /// True iff every ticket in the catalog has been revealed and the
    /// catalog is non-empty.
    #[must_use]
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        !catalog.is_empty() && catalog.ids().all(|id| self.revealed.contains(id))
    }

    /// Completion ratio in percent, for the progress bar.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_pct(&self, catalog: &Catalog) -> f64 {
        if catalog.is_empty() {
            return 0.0;
        }
        self.revealed.len() as f64 / catalog.len() as f64 * 100.0
    }
}
