//! Tests for the in-memory holding repository.

use super::*;
use crate::errors::{Error, ValidationError};
use rust_decimal_macros::dec;

fn record(symbol: Option<&str>, sector: &str) -> HoldingRecord {
    HoldingRecord {
        symbol: symbol.map(str::to_string),
        name: Some("Name".to_string()),
        sector: Some(sector.to_string()),
        shares: Some(dec!(10)),
        cost_basis: Some(dec!(100)),
        current_price: Some(dec!(120)),
    }
}

#[test]
fn test_get_before_load_is_not_loaded() {
    let repo = HoldingRepository::new();
    assert!(repo.get().is_none());
    assert!(!repo.is_loaded());
    assert!(matches!(repo.require(), Err(Error::NotLoaded)));
}

#[test]
fn test_load_empty_is_loaded() {
    let repo = HoldingRepository::new();
    let report = repo.load(Vec::new());
    assert!(report.holdings.is_empty());
    assert!(report.rejected.is_empty());
    assert!(repo.is_loaded());
}

#[test]
fn test_load_reports_records_without_symbol() {
    let repo = HoldingRepository::new();
    let report = repo.load(vec![
        record(Some("aapl"), "Technology"),
        record(None, "Energy"),
        record(Some(""), "Energy"),
        record(Some("XOM"), "Energy"),
    ]);

    assert_eq!(report.holdings.symbols(), vec!["AAPL", "XOM"]);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].index, 1);
    assert_eq!(report.rejected[0].symbol, None);
    assert_eq!(
        report.rejected[0].reason,
        ValidationError::MissingField("symbol".to_string())
    );
    assert_eq!(report.rejected[1].index, 2);
    assert_eq!(repo.get().unwrap().len(), 2);
}

#[test]
fn test_load_reports_duplicate_symbols() {
    let repo = HoldingRepository::new();
    let report = repo.load(vec![
        record(Some("AAPL"), "Technology"),
        record(Some("aapl"), "Other"),
    ]);

    assert_eq!(report.holdings.len(), 1);
    assert_eq!(report.holdings.as_slice()[0].sector, "Technology");
    assert_eq!(
        report.rejected[0].reason,
        ValidationError::DuplicateSymbol("AAPL".to_string())
    );
    assert_eq!(report.rejected[0].symbol.as_deref(), Some("aapl"));
}

#[test]
fn test_load_reports_records_beyond_decimal_range() {
    let repo = HoldingRepository::new();
    let mut big = record(Some("big"), "Energy");
    big.shares = Some(dec!(100000000000000000000));
    big.cost_basis = Some(dec!(1));
    big.current_price = Some(dec!(10000000000));

    let report = repo.load(vec![record(Some("AAPL"), "Technology"), big]);

    assert_eq!(report.holdings.symbols(), vec!["AAPL"]);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].index, 1);
    assert_eq!(report.rejected[0].symbol.as_deref(), Some("big"));
    assert_eq!(
        report.rejected[0].reason,
        ValidationError::OutOfRange("BIG".to_string())
    );
}

#[test]
fn test_replace_swaps_snapshot() {
    let repo = HoldingRepository::new();
    repo.load(vec![record(Some("AAPL"), "Technology")]);
    let before = repo.get().unwrap();

    let next = before.with_removed(0);
    let stored = repo.replace(next);

    assert!(stored.is_empty());
    assert!(repo.get().unwrap().is_empty());
    // Earlier readers keep their snapshot
    assert_eq!(before.len(), 1);
}

#[test]
fn test_rejected_record_serializes_reason_as_text() {
    let repo = HoldingRepository::new();
    let report = repo.load(vec![record(None, "Energy")]);
    let json = serde_json::to_value(&report.rejected[0]).unwrap();
    assert_eq!(json["index"], 0);
    assert_eq!(json["reason"], "Required field 'symbol' is missing");
}
