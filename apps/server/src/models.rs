use equitytrack_core::{
    constants::PERCENTAGE_DECIMAL_PRECISION,
    events::PortfolioView,
    performance::HistoryChange,
    portfolio::{HoldingRow, PerformerSummary},
    utils::{format_currency, format_percentage},
    HistoricalPoint, PortfolioMetrics, SectorAllocationEntry,
};
use serde::{Deserialize, Serialize};

/// Metrics rendered for the summary cards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDisplay {
    pub total_value: String,
    pub total_cost: String,
    pub total_gain: String,
    pub gain_percentage: String,
}

impl SummaryDisplay {
    pub fn new(metrics: &PortfolioMetrics, currency_symbol: &str) -> Self {
        Self {
            total_value: format_currency(metrics.total_value, currency_symbol),
            total_cost: format_currency(metrics.total_cost, currency_symbol),
            total_gain: format_currency(metrics.total_gain, currency_symbol),
            gain_percentage: format_percentage(
                metrics.gain_percentage,
                PERCENTAGE_DECIMAL_PRECISION,
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub metrics: PortfolioMetrics,
    pub summary: SummaryDisplay,
    pub allocation: Vec<SectorAllocationEntry>,
    pub holdings: Vec<HoldingRow>,
    pub performers: PerformerSummary,
}

impl PortfolioResponse {
    pub fn from_view(view: &PortfolioView, currency_symbol: &str) -> Self {
        Self {
            metrics: view.metrics,
            summary: SummaryDisplay::new(&view.metrics, currency_symbol),
            allocation: view.allocation.clone(),
            holdings: view.rows.clone(),
            performers: view.performers.clone(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct AddHoldingQuery {
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Deserialize, Debug, Default)]
pub struct HistoryQuery {
    pub period: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub change: HistoryChange,
    pub points: Vec<HistoricalPoint>,
}
