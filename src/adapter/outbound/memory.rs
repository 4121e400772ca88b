//! In-memory seen-trade store.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::domain::TradeIdentity;
use crate::port::SeenStore;

/// Volatile [`SeenStore`] backed by a hash set.
///
/// Grows for the life of the process; there is no expiry.
#[derive(Debug, Default)]
pub struct MemorySeenStore {
    seen: RwLock<HashSet<TradeIdentity>>,
}

impl MemorySeenStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeenStore for MemorySeenStore {
    fn contains(&self, identity: &TradeIdentity) -> bool {
        self.seen.read().contains(identity)
    }

    fn add(&self, identity: TradeIdentity) {
        self.seen.write().insert(identity);
    }

    fn len(&self) -> usize {
        self.seen.read().len()
    }
}
