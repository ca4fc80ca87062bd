//! Tests for holding domain models.

use super::*;
use crate::errors::{Error, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn holding(symbol: &str, shares: Decimal, cost: Decimal, price: Decimal) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        name: format!("{} Inc.", symbol),
        sector: "Technology".to_string(),
        shares,
        cost_basis: cost,
        current_price: price,
    }
}

// ==================== Derived values ====================

#[test]
fn test_derived_values() {
    let h = holding("AAPL", dec!(10), dec!(100), dec!(150));
    assert_eq!(h.current_value(), dec!(1500));
    assert_eq!(h.cost_value(), dec!(1000));
    assert_eq!(h.gain(), dec!(500));
    assert_eq!(h.gain_percent(), dec!(50));
}

#[test]
fn test_gain_percent_zero_cost() {
    let h = holding("GIFT", dec!(5), Decimal::ZERO, dec!(20));
    assert_eq!(h.gain(), dec!(100));
    assert_eq!(h.gain_percent(), Decimal::ZERO);
}

#[test]
fn test_negative_shares_are_kept() {
    let h = holding("SHRT", dec!(-10), dec!(50), dec!(40));
    assert_eq!(h.current_value(), dec!(-400));
    assert_eq!(h.cost_value(), dec!(-500));
    assert_eq!(h.gain(), dec!(100));
    assert_eq!(h.gain_percent(), dec!(20));
}

#[test]
fn test_accessors_saturate_instead_of_overflowing() {
    let h = holding("BIG", Decimal::MAX, dec!(1), dec!(2));
    assert_eq!(h.current_value(), Decimal::MAX);
    assert_eq!(h.cost_value(), Decimal::MAX);
    assert_eq!(h.gain(), Decimal::ZERO);
    assert_eq!(h.gain_percent(), Decimal::ZERO);

    let tiny = holding("TINY", dec!(1), Decimal::new(1, 28), dec!(1000000));
    assert_eq!(tiny.gain_percent(), Decimal::MAX);
}

#[test]
fn test_check_range() {
    assert!(holding("AAPL", dec!(10), dec!(100), dec!(150)).check_range().is_ok());
    assert_eq!(
        holding("BIG", dec!(100000000000000000000), dec!(1), dec!(10000000000))
            .check_range()
            .unwrap_err(),
        ValidationError::OutOfRange("BIG".to_string())
    );
}

// ==================== Record conversion ====================

#[test]
fn test_record_schema_deserialization() {
    let json = r#"{"symbol":" msft ","name":"Microsoft","sector":"Technology",
        "shares":5,"costBasis":250.5,"currentPrice":310}"#;
    let record: HoldingRecord = serde_json::from_str(json).unwrap();
    let h = Holding::try_from(record).unwrap();
    assert_eq!(h.symbol, "MSFT");
    assert_eq!(h.cost_basis, dec!(250.5));
    assert_eq!(h.current_price, dec!(310));
}

#[test]
fn test_record_name_and_sector_optional() {
    let json = r#"{"symbol":"KO","shares":1,"costBasis":50,"currentPrice":60}"#;
    let record: HoldingRecord = serde_json::from_str(json).unwrap();
    let h = Holding::try_from(record).unwrap();
    assert_eq!(h.name, "");
    assert_eq!(h.sector, "");
}

#[test]
fn test_record_missing_symbol() {
    let record = HoldingRecord {
        symbol: Some("   ".to_string()),
        shares: Some(dec!(1)),
        cost_basis: Some(dec!(1)),
        current_price: Some(dec!(1)),
        ..Default::default()
    };
    assert_eq!(
        Holding::try_from(record).unwrap_err(),
        ValidationError::MissingField("symbol".to_string())
    );
}

#[test]
fn test_record_missing_price() {
    let record = HoldingRecord {
        symbol: Some("IBM".to_string()),
        shares: Some(dec!(1)),
        cost_basis: Some(dec!(1)),
        ..Default::default()
    };
    assert_eq!(
        Holding::try_from(record).unwrap_err(),
        ValidationError::MissingField("currentPrice".to_string())
    );
}

#[test]
fn test_record_numeric_strings_and_garbage() {
    let json = r#"{"symbol":"T","shares":"12","costBasis":"abc","currentPrice":null}"#;
    let record: HoldingRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.shares, Some(dec!(12)));
    assert_eq!(record.cost_basis, None);
    assert_eq!(record.current_price, None);
    assert_eq!(
        Holding::try_from(record).unwrap_err(),
        ValidationError::MissingField("costBasis".to_string())
    );
}

#[test]
fn test_holding_serializes_to_record_schema() {
    let h = holding("AAPL", dec!(10), dec!(100), dec!(150));
    let value = serde_json::to_value(&h).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<_> = obj.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["costBasis", "currentPrice", "name", "sector", "shares", "symbol"]
    );
    assert!(obj["shares"].is_number());
}

// ==================== Inputs ====================

#[test]
fn test_new_holding_normalizes_symbol() {
    let new = NewHolding {
        symbol: "aapl".to_string(),
        name: "Apple".to_string(),
        sector: "Technology".to_string(),
        shares: dec!(10),
        cost_basis: dec!(100),
        current_price: dec!(150),
    };
    assert_eq!(new.into_holding().unwrap().symbol, "AAPL");
}

#[test]
fn test_new_holding_requires_symbol() {
    let new = NewHolding {
        symbol: "".to_string(),
        name: String::new(),
        sector: String::new(),
        shares: dec!(1),
        cost_basis: dec!(1),
        current_price: dec!(1),
    };
    assert!(matches!(
        new.into_holding(),
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
}

#[test]
fn test_new_holding_rejects_value_beyond_decimal_range() {
    let new = NewHolding {
        symbol: "big".to_string(),
        name: String::new(),
        sector: String::new(),
        shares: dec!(100000000000000000000),
        cost_basis: dec!(1),
        current_price: dec!(10000000000),
    };
    assert!(matches!(
        new.into_holding(),
        Err(Error::Validation(ValidationError::OutOfRange(ref s))) if s == "BIG"
    ));
}

#[test]
fn test_new_holding_rejects_unrepresentable_gain_percent() {
    let new = NewHolding {
        symbol: "TINY".to_string(),
        name: String::new(),
        sector: String::new(),
        shares: dec!(1),
        cost_basis: Decimal::new(1, 28),
        current_price: dec!(1000000),
    };
    assert!(matches!(
        new.into_holding(),
        Err(Error::Validation(ValidationError::OutOfRange(_)))
    ));
}

#[test]
fn test_update_replaces_every_field() {
    let update = HoldingUpdate {
        name: String::new(),
        sector: "Energy".to_string(),
        shares: dec!(3),
        cost_basis: dec!(9),
        current_price: dec!(7),
    };
    let h = update.into_holding("xom");
    assert_eq!(h.symbol, "XOM");
    assert_eq!(h.name, "");
    assert_eq!(h.sector, "Energy");
}

// ==================== HoldingSet ====================

#[test]
fn test_holding_set_rejects_duplicates() {
    let result = HoldingSet::from_holdings(vec![
        holding("AAPL", dec!(1), dec!(1), dec!(1)),
        holding("AAPL", dec!(2), dec!(2), dec!(2)),
    ]);
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::DuplicateSymbol(ref s))) if s == "AAPL"
    ));
}

#[test]
fn test_holding_set_rejects_totals_beyond_decimal_range() {
    let half = Decimal::MAX / dec!(2) + dec!(1);
    let result = HoldingSet::from_holdings(vec![
        holding("A", dec!(1), Decimal::ZERO, half),
        holding("B", dec!(1), Decimal::ZERO, half),
    ]);
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::OutOfRange(ref s))) if s == "B"
    ));

    let set = HoldingSet::from_holdings(vec![holding("A", dec!(1), Decimal::ZERO, half)]).unwrap();
    assert!(set.check_range().is_ok());
    let appended = set.with_appended(holding("B", dec!(1), Decimal::ZERO, half));
    assert!(matches!(
        appended.check_range(),
        Err(Error::Validation(ValidationError::OutOfRange(_)))
    ));
}

#[test]
fn test_holding_set_lookup_is_case_insensitive() {
    let set = HoldingSet::from_holdings(vec![
        holding("AAPL", dec!(1), dec!(1), dec!(1)),
        holding("MSFT", dec!(1), dec!(1), dec!(1)),
    ])
    .unwrap();
    assert_eq!(set.position("msft"), Some(1));
    assert!(set.contains(" aapl"));
    assert!(set.get("GOOG").is_none());
    assert_eq!(set.symbols(), vec!["AAPL", "MSFT"]);
}

#[test]
fn test_holding_set_copy_on_write() {
    let set = HoldingSet::from_holdings(vec![holding("AAPL", dec!(1), dec!(1), dec!(1))]).unwrap();
    let appended = set.with_appended(holding("MSFT", dec!(1), dec!(1), dec!(1)));
    let replaced = appended.with_replaced(0, holding("AAPL", dec!(9), dec!(1), dec!(1)));
    let removed = replaced.with_removed(0);

    assert_eq!(set.len(), 1);
    assert_eq!(appended.symbols(), vec!["AAPL", "MSFT"]);
    assert_eq!(replaced.as_slice()[0].shares, dec!(9));
    assert_eq!(replaced.symbols(), vec!["AAPL", "MSFT"]);
    assert_eq!(removed.symbols(), vec!["MSFT"]);
}

#[test]
fn test_historical_point_schema() {
    let point: HistoricalPoint =
        serde_json::from_str(r#"{"date":"2024-03-01","value":10500.25}"#).unwrap();
    assert_eq!(point.value, dec!(10500.25));
    assert_eq!(point.date.to_string(), "2024-03-01");
}
