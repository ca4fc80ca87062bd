//! Holding domain models.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::{checked_percentage_change, percentage_change};

/// Normalizes a ticker symbol to its stored form (trimmed, uppercase).
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// One equity position.
///
/// `symbol` is the primary key within a [`HoldingSet`]. Zero or negative
/// quantities and prices are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub shares: Decimal,
    /// Price per share at acquisition
    pub cost_basis: Decimal,
    /// Current price per share
    pub current_price: Decimal,
}

impl Holding {
    /// `shares * current_price`, saturating at the Decimal range.
    pub fn current_value(&self) -> Decimal {
        self.shares.saturating_mul(self.current_price)
    }

    /// `shares * cost_basis`, saturating at the Decimal range.
    pub fn cost_value(&self) -> Decimal {
        self.shares.saturating_mul(self.cost_basis)
    }

    pub fn gain(&self) -> Decimal {
        self.current_value().saturating_sub(self.cost_value())
    }

    /// Percentage change from cost value to current value (0 at zero cost).
    pub fn gain_percent(&self) -> Decimal {
        percentage_change(self.cost_value(), self.current_value())
    }

    /// Fails when any derived value of this holding leaves the Decimal range.
    ///
    /// Holdings that pass never saturate in the accessors above.
    pub fn check_range(&self) -> std::result::Result<(), ValidationError> {
        self.checked_values()
            .map(|_| ())
            .ok_or_else(|| ValidationError::OutOfRange(self.symbol.clone()))
    }

    /// `(current_value, cost_value)` when value, cost, gain and gain
    /// percentage are all representable.
    fn checked_values(&self) -> Option<(Decimal, Decimal)> {
        let value = self.shares.checked_mul(self.current_price)?;
        let cost = self.shares.checked_mul(self.cost_basis)?;
        value.checked_sub(cost)?;
        checked_percentage_change(cost, value)?;
        Some((value, cost))
    }
}

/// Running portfolio totals that refuse a holding which would push value,
/// cost, gain or gain percentage out of the Decimal range.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RangeGuard {
    value: Decimal,
    cost: Decimal,
}

impl RangeGuard {
    /// Adds `holding` to the totals, leaving them untouched on failure.
    pub(crate) fn admit(&mut self, holding: &Holding) -> std::result::Result<(), ValidationError> {
        let out_of_range = || ValidationError::OutOfRange(holding.symbol.clone());
        let (value, cost) = holding.checked_values().ok_or_else(out_of_range)?;
        let value = self.value.checked_add(value).ok_or_else(out_of_range)?;
        let cost = self.cost.checked_add(cost).ok_or_else(out_of_range)?;
        value.checked_sub(cost).ok_or_else(out_of_range)?;
        checked_percentage_change(cost, value).ok_or_else(out_of_range)?;

        self.value = value;
        self.cost = cost;
        Ok(())
    }
}

/// Input model for adding a holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    pub shares: Decimal,
    pub cost_basis: Decimal,
    pub current_price: Decimal,
}

impl NewHolding {
    /// Validates the new holding data.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        Ok(())
    }

    /// Validates and converts into a stored holding with a normalized symbol.
    pub fn into_holding(self) -> Result<Holding> {
        self.validate()?;
        let holding = Holding {
            symbol: normalize_symbol(&self.symbol),
            name: self.name,
            sector: self.sector,
            shares: self.shares,
            cost_basis: self.cost_basis,
            current_price: self.current_price,
        };
        holding.check_range()?;
        Ok(holding)
    }
}

/// Input model for updating a holding.
///
/// Carries every non-key field: an update replaces the stored values
/// wholesale, nothing is merged with the previous holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    pub shares: Decimal,
    pub cost_basis: Decimal,
    pub current_price: Decimal,
}

impl HoldingUpdate {
    pub fn into_holding(self, symbol: &str) -> Holding {
        Holding {
            symbol: normalize_symbol(symbol),
            name: self.name,
            sector: self.sector,
            shares: self.shares,
            cost_basis: self.cost_basis,
            current_price: self.current_price,
        }
    }
}

impl From<Holding> for HoldingUpdate {
    fn from(holding: Holding) -> Self {
        Self {
            name: holding.name,
            sector: holding.sector,
            shares: holding.shares,
            cost_basis: holding.cost_basis,
            current_price: holding.current_price,
        }
    }
}

/// Stored/wire form of a holding.
///
/// Every field is optional here so that a bad record can be reported with
/// the field it lacks instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldingRecord {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub sector: Option<String>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub shares: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub cost_basis: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub current_price: Option<Decimal>,
}

/// Reads a JSON number or numeric string; anything else counts as absent.
fn lenient_decimal<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let text = match &value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        _ => return Ok(None),
    };
    Ok(Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok())
}

impl HoldingRecord {
    /// Symbol as written in the record, if any.
    pub fn raw_symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

impl TryFrom<HoldingRecord> for Holding {
    type Error = ValidationError;

    fn try_from(record: HoldingRecord) -> std::result::Result<Self, Self::Error> {
        let symbol = record
            .symbol
            .as_deref()
            .map(normalize_symbol)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ValidationError::MissingField("symbol".to_string()))?;
        let shares = record
            .shares
            .ok_or_else(|| ValidationError::MissingField("shares".to_string()))?;
        let cost_basis = record
            .cost_basis
            .ok_or_else(|| ValidationError::MissingField("costBasis".to_string()))?;
        let current_price = record
            .current_price
            .ok_or_else(|| ValidationError::MissingField("currentPrice".to_string()))?;

        Ok(Holding {
            symbol,
            name: record.name.unwrap_or_default(),
            sector: record.sector.unwrap_or_default(),
            shares,
            cost_basis,
            current_price,
        })
    }
}

impl From<&Holding> for HoldingRecord {
    fn from(holding: &Holding) -> Self {
        Self {
            symbol: Some(holding.symbol.clone()),
            name: Some(holding.name.clone()),
            sector: Some(holding.sector.clone()),
            shares: Some(holding.shares),
            cost_basis: Some(holding.cost_basis),
            current_price: Some(holding.current_price),
        }
    }
}

/// Ordered collection of holdings with unique symbols.
///
/// Insertion order is the display order. A set is an immutable snapshot:
/// every mutation builds a new set through the `with_*` methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoldingSet(Vec<Holding>);

impl HoldingSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a set from holdings, rejecting a repeated symbol or values
    /// whose totals leave the Decimal range.
    pub fn from_holdings(holdings: Vec<Holding>) -> Result<Self> {
        let mut set = Self(Vec::with_capacity(holdings.len()));
        let mut guard = RangeGuard::default();
        for holding in holdings {
            if set.contains(&holding.symbol) {
                return Err(Error::Validation(ValidationError::DuplicateSymbol(
                    holding.symbol,
                )));
            }
            guard.admit(&holding)?;
            set.0.push(holding);
        }
        Ok(set)
    }

    /// Fails when a holding or the set's totals leave the Decimal range.
    pub fn check_range(&self) -> Result<()> {
        let mut guard = RangeGuard::default();
        for holding in self {
            guard.admit(holding)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holding> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Holding] {
        &self.0
    }

    /// Index of the holding with this symbol (matched after normalization).
    pub fn position(&self, symbol: &str) -> Option<usize> {
        let symbol = normalize_symbol(symbol);
        self.0.iter().position(|h| h.symbol == symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.position(symbol).map(|idx| &self.0[idx])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.position(symbol).is_some()
    }

    pub fn symbols(&self) -> Vec<String> {
        self.0.iter().map(|h| h.symbol.clone()).collect()
    }

    /// Appends a holding whose symbol the caller has checked is absent.
    pub(crate) fn push_unique(&mut self, holding: Holding) {
        debug_assert!(!self.contains(&holding.symbol));
        self.0.push(holding);
    }

    /// New set with `holding` appended at the end.
    pub(crate) fn with_appended(&self, holding: Holding) -> Self {
        let mut holdings = self.0.clone();
        holdings.push(holding);
        Self(holdings)
    }

    /// New set with the holding at `index` replaced, keeping its position.
    pub(crate) fn with_replaced(&self, index: usize, holding: Holding) -> Self {
        let mut holdings = self.0.clone();
        holdings[index] = holding;
        Self(holdings)
    }

    /// New set without the holding at `index`.
    pub(crate) fn with_removed(&self, index: usize) -> Self {
        let mut holdings = self.0.clone();
        holdings.remove(index);
        Self(holdings)
    }
}

impl<'a> IntoIterator for &'a HoldingSet {
    type Item = &'a Holding;
    type IntoIter = std::slice::Iter<'a, Holding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One point of the externally supplied portfolio value series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}
