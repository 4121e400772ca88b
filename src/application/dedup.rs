//! Seen-set admission for disclosures.

use std::sync::Arc;

use crate::domain::TradeIdentity;
use crate::port::SeenStore;

/// Decides whether a disclosure has already been evaluated.
///
/// Membership only: entries never expire and the set is unbounded for the
/// life of the process.
#[derive(Clone)]
pub struct Deduplicator {
    store: Arc<dyn SeenStore>,
}

impl Deduplicator {
    #[must_use]
    pub fn new(store: Arc<dyn SeenStore>) -> Self {
        Self { store }
    }

    /// True when the identity has not been marked seen yet.
    #[must_use]
    pub fn is_new(&self, identity: &TradeIdentity) -> bool {
        !self.store.contains(identity)
    }

    /// Record an identity. Marking twice is a no-op.
    pub fn mark_seen(&self, identity: TradeIdentity) {
        self.store.add(identity);
    }

    /// Number of identities seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
