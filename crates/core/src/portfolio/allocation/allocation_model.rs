//! Allocation models for the sector breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current value held in one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocationEntry {
    /// Sector label as written on the holdings (may be empty)
    pub sector: String,
    /// Summed current value of the sector's holdings
    pub value: Decimal,
    /// Share of the portfolio's total value (0-100)
    pub percentage: Decimal,
}
