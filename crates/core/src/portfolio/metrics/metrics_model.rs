//! Portfolio metrics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate value, cost and gain of a holding set.
///
/// `total_gain` is always `total_value - total_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain: Decimal,
    /// Percentage change from total cost to total value (0 at zero cost)
    pub gain_percentage: Decimal,
}

impl PortfolioMetrics {
    /// Metrics of an empty or absent holding set.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// One holding with its derived values, as shown in the holdings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub shares: Decimal,
    pub cost_basis: Decimal,
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub cost_value: Decimal,
    pub gain: Decimal,
    pub gain_percent: Decimal,
    /// Share of the portfolio's total value (0-100)
    pub weight: Decimal,
}

/// Gain percentage of a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingPerformance {
    pub symbol: String,
    pub gain_percent: Decimal,
}

/// Best and worst holdings by gain percentage. Both absent on an empty set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerSummary {
    pub best: Option<HoldingPerformance>,
    pub worst: Option<HoldingPerformance>,
}
