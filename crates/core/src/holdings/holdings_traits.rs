//! Persistence contract for holdings and history.
//!
//! The core never reads or writes storage itself; a runtime supplies an
//! implementation of this trait (see the `storage-json` crate).

use async_trait::async_trait;

use super::holdings_model::{HistoricalPoint, HoldingRecord, HoldingSet};
use crate::errors::Result;

/// Trait defining the contract for the external portfolio store.
///
/// Failures are returned as `Error::Persistence` and are never retried by
/// the core.
#[async_trait]
pub trait PortfolioStoreTrait: Send + Sync {
    /// Reads the raw holding records. Records are validated by the
    /// repository, not by the store.
    async fn load_holdings(&self) -> Result<Vec<HoldingRecord>>;

    /// Reads the historical value series, in stored order.
    async fn load_history(&self) -> Result<Vec<HistoricalPoint>>;

    /// Writes the complete holding set, replacing what was stored.
    async fn save_holdings(&self, holdings: &HoldingSet) -> Result<()>;
}
