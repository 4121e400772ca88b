//! Disclosure source port.

use async_trait::async_trait;

use crate::domain::RawTable;
use crate::error::FetchError;

/// Supplies the raw disclosure table for one cycle.
///
/// Implementations must bound every network call with a timeout. Any failure
/// (transport, status, missing table) is reported as a [`FetchError`]; the
/// cycle runner treats it as "nothing to do this cycle".
#[async_trait]
pub trait DisclosureSource: Send + Sync {
    /// Fetch and parse the current disclosure table.
    async fn fetch_table(&self) -> Result<RawTable, FetchError>;

    /// Human-readable source name for logging.
    fn name(&self) -> &str;
}
