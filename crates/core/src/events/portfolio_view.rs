//! Published view types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::holdings::{HistoricalPoint, HoldingSet};
use crate::portfolio::{
    compute_holding_rows, compute_metrics, compute_sector_allocation, find_performers,
    HoldingRow, PerformerSummary, PortfolioMetrics, SectorAllocationEntry,
};

/// Everything a renderer needs after one refresh cycle.
///
/// Built from scratch for each cycle; never patched incrementally.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub metrics: PortfolioMetrics,
    pub allocation: Vec<SectorAllocationEntry>,
    pub holdings: Arc<HoldingSet>,
    pub rows: Vec<HoldingRow>,
    pub performers: PerformerSummary,
    pub history: Arc<Vec<HistoricalPoint>>,
}

impl PortfolioView {
    /// Runs the aggregation engine over `holdings`.
    pub fn compute(holdings: Arc<HoldingSet>, history: Arc<Vec<HistoricalPoint>>) -> Self {
        Self {
            metrics: compute_metrics(&*holdings),
            allocation: compute_sector_allocation(&*holdings),
            rows: compute_holding_rows(&*holdings),
            performers: find_performers(&*holdings),
            holdings,
            history,
        }
    }
}

/// The step of the cycle that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureScope {
    InitialLoad,
    Add,
    Update,
    Delete,
}

impl fmt::Display for FailureScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureScope::InitialLoad => "initial load",
            FailureScope::Add => "add",
            FailureScope::Update => "update",
            FailureScope::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A failed cycle. The previously published view stays current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFailure {
    pub scope: FailureScope,
    pub symbol: Option<String>,
    pub message: String,
}

impl ViewFailure {
    pub fn new(scope: FailureScope, symbol: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            scope,
            symbol: symbol.map(str::to_string),
            message: message.into(),
        }
    }
}
