use super::history_model::{HistoryChange, TimePeriod};
use crate::holdings::HistoricalPoint;
use crate::utils::percentage_change;

/// Points inside `period`, sorted by date.
///
/// The window ends on the latest date found in `history`; the series itself
/// may come in any order. Points sharing a date keep their input order.
pub fn points_in_period(history: &[HistoricalPoint], period: TimePeriod) -> Vec<HistoricalPoint> {
    let Some(anchor) = history.iter().map(|p| p.date).max() else {
        return Vec::new();
    };
    let start = period.start_date(anchor);

    let mut points: Vec<HistoricalPoint> = history
        .iter()
        .filter(|p| p.date >= start && p.date <= anchor)
        .cloned()
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Value change between the first and last point of `period`.
pub fn compute_history_change(history: &[HistoricalPoint], period: TimePeriod) -> HistoryChange {
    let points = points_in_period(history, period);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return HistoryChange::flat(period);
    };
    if points.len() < 2 {
        return HistoryChange::flat(period);
    }

    HistoryChange {
        period,
        start_date: Some(first.date),
        end_date: Some(last.date),
        start_value: first.value,
        end_value: last.value,
        value_change: last.value.saturating_sub(first.value),
        percent_change: percentage_change(first.value, last.value),
    }
}
