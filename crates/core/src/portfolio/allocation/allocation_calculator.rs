use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::allocation_model::SectorAllocationEntry;
use crate::holdings::HoldingSet;
use crate::utils::percentage_of;

/// Groups current value by sector label.
///
/// Entries appear in order of each sector's first holding, so the same
/// input order always yields the same output order. When the total value
/// is zero every percentage is zero.
pub fn compute_sector_allocation<'a>(
    holdings: impl Into<Option<&'a HoldingSet>>,
) -> Vec<SectorAllocationEntry> {
    let Some(holdings) = holdings.into() else {
        return Vec::new();
    };

    let mut index_by_sector: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Decimal)> = Vec::new();
    let mut total_value = Decimal::ZERO;

    for holding in holdings {
        let value = holding.current_value();
        total_value = total_value.saturating_add(value);

        match index_by_sector.get(holding.sector.as_str()) {
            Some(&idx) => groups[idx].1 = groups[idx].1.saturating_add(value),
            None => {
                index_by_sector.insert(holding.sector.as_str(), groups.len());
                groups.push((holding.sector.as_str(), value));
            }
        }
    }

    if total_value.is_zero() {
        debug!(
            "Total value is zero, reporting 0% for {} sectors",
            groups.len()
        );
    }

    groups
        .into_iter()
        .map(|(sector, value)| SectorAllocationEntry {
            sector: sector.to_string(),
            value,
            percentage: percentage_of(value, total_value),
        })
        .collect()
}
