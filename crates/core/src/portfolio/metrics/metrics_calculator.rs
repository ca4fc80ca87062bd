use rust_decimal::Decimal;

use super::metrics_model::{HoldingPerformance, HoldingRow, PerformerSummary, PortfolioMetrics};
use crate::holdings::HoldingSet;
use crate::utils::{percentage_change, percentage_of};

/// Sums value and cost over the set in one pass and derives gain figures.
///
/// An empty or absent set yields [`PortfolioMetrics::zero`]. Sums saturate
/// at the Decimal range; sets that pass [`HoldingSet::check_range`] never
/// reach it.
pub fn compute_metrics<'a>(holdings: impl Into<Option<&'a HoldingSet>>) -> PortfolioMetrics {
    let Some(holdings) = holdings.into() else {
        return PortfolioMetrics::zero();
    };

    let (total_value, total_cost) = holdings.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(value, cost), holding| {
            (
                value.saturating_add(holding.current_value()),
                cost.saturating_add(holding.cost_value()),
            )
        },
    );

    PortfolioMetrics {
        total_value,
        total_cost,
        total_gain: total_value.saturating_sub(total_cost),
        gain_percentage: percentage_change(total_cost, total_value),
    }
}

/// Derived per-holding rows in set order. Weights are 0 when the total
/// value is 0.
pub fn compute_holding_rows<'a>(holdings: impl Into<Option<&'a HoldingSet>>) -> Vec<HoldingRow> {
    let Some(holdings) = holdings.into() else {
        return Vec::new();
    };
    let total_value = compute_metrics(holdings).total_value;

    holdings
        .iter()
        .map(|holding| {
            let current_value = holding.current_value();
            HoldingRow {
                symbol: holding.symbol.clone(),
                name: holding.name.clone(),
                sector: holding.sector.clone(),
                shares: holding.shares,
                cost_basis: holding.cost_basis,
                current_price: holding.current_price,
                current_value,
                cost_value: holding.cost_value(),
                gain: holding.gain(),
                gain_percent: holding.gain_percent(),
                weight: percentage_of(current_value, total_value),
            }
        })
        .collect()
}

/// Holdings with the highest and lowest gain percentage. On ties the
/// earlier holding wins.
pub fn find_performers<'a>(holdings: impl Into<Option<&'a HoldingSet>>) -> PerformerSummary {
    let Some(holdings) = holdings.into() else {
        return PerformerSummary::default();
    };

    let mut best: Option<HoldingPerformance> = None;
    let mut worst: Option<HoldingPerformance> = None;

    for holding in holdings {
        let gain_percent = holding.gain_percent();
        if best.as_ref().map_or(true, |b| gain_percent > b.gain_percent) {
            best = Some(HoldingPerformance {
                symbol: holding.symbol.clone(),
                gain_percent,
            });
        }
        if worst.as_ref().map_or(true, |w| gain_percent < w.gain_percent) {
            worst = Some(HoldingPerformance {
                symbol: holding.symbol.clone(),
                gain_percent,
            });
        }
    }

    PerformerSummary { best, worst }
}
