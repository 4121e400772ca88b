//! Seen-trade memory port.

use crate::domain::TradeIdentity;

/// Set of trade identities that have already been evaluated.
///
/// Constructed once per process and injected into the deduplicator. The only
/// shipped implementation is in memory, so the set resets on restart.
pub trait SeenStore: Send + Sync {
    /// Whether the identity has been recorded.
    fn contains(&self, identity: &TradeIdentity) -> bool;

    /// Record an identity. Adding an existing identity has no effect.
    fn add(&self, identity: TradeIdentity);

    /// Number of recorded identities.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
