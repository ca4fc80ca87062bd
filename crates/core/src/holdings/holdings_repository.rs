//! In-memory store of the current holding set.

use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, warn};
use serde::Serialize;

use super::holdings_model::{Holding, HoldingRecord, HoldingSet, RangeGuard};
use crate::errors::{Error, Result, ValidationError};

/// A record that `load` refused, with its position in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRecord {
    pub index: usize,
    pub symbol: Option<String>,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: ValidationError,
}

fn serialize_reason<S: serde::Serializer>(
    reason: &ValidationError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&reason.to_string())
}

/// Outcome of [`HoldingRepository::load`].
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub holdings: Arc<HoldingSet>,
    pub rejected: Vec<RejectedRecord>,
}

/// Owns the current [`HoldingSet`] snapshot.
///
/// Readers get an `Arc` to an immutable set; `replace` swaps the pointer, so
/// a reader sees either the old set or the new one, never a mix.
#[derive(Debug, Default)]
pub struct HoldingRepository {
    snapshot: RwLock<Option<Arc<HoldingSet>>>,
}

impl HoldingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `records` and stores the valid ones in input order.
    ///
    /// Records without a symbol or a numeric field, repeats of a symbol
    /// already accepted, and records whose values would push the totals out
    /// of the Decimal range are reported in the returned [`LoadReport`].
    pub fn load(&self, records: Vec<HoldingRecord>) -> LoadReport {
        let mut accepted = HoldingSet::new();
        let mut guard = RangeGuard::default();
        let mut rejected = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let raw_symbol = record.raw_symbol().map(str::to_string);
            let admitted = Holding::try_from(record).and_then(|holding| {
                if accepted.contains(&holding.symbol) {
                    return Err(ValidationError::DuplicateSymbol(holding.symbol));
                }
                guard.admit(&holding)?;
                Ok(holding)
            });
            match admitted {
                Ok(holding) => accepted.push_unique(holding),
                Err(reason) => {
                    warn!("Rejected record {}: {}", index, reason);
                    rejected.push(RejectedRecord {
                        index,
                        symbol: raw_symbol,
                        reason,
                    });
                }
            }
        }

        debug!(
            "Loaded {} holdings ({} rejected)",
            accepted.len(),
            rejected.len()
        );

        let holdings = Arc::new(accepted);
        self.store(Some(holdings.clone()));

        LoadReport { holdings, rejected }
    }

    /// Current snapshot, or `None` if nothing was ever loaded.
    pub fn get(&self) -> Option<Arc<HoldingSet>> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current snapshot, or `Error::NotLoaded`.
    pub fn require(&self) -> Result<Arc<HoldingSet>> {
        self.get().ok_or(Error::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.get().is_some()
    }

    /// Swaps in `holdings` as the current snapshot.
    pub fn replace(&self, holdings: impl Into<Arc<HoldingSet>>) -> Arc<HoldingSet> {
        let holdings = holdings.into();
        self.store(Some(holdings.clone()));
        holdings
    }

    fn store(&self, value: Option<Arc<HoldingSet>>) {
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = value;
    }
}
