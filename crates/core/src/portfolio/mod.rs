//! Aggregation engine.
//!
//! Pure functions from a [`HoldingSet`](crate::holdings::HoldingSet) snapshot
//! to derived views. Nothing here stores state; callers recompute after
//! every change.

pub mod allocation;
pub mod metrics;

pub use allocation::{compute_sector_allocation, SectorAllocationEntry};
pub use metrics::{
    compute_holding_rows, compute_metrics, find_performers, HoldingPerformance, HoldingRow,
    PerformerSummary, PortfolioMetrics,
};
