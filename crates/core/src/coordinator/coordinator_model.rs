//! Commands and outcomes of the mutation cycle.

use serde::{Deserialize, Serialize};

use crate::events::PortfolioView;
use crate::holdings::{HoldingUpdate, NewHolding, RejectedRecord};

/// What to do when an added symbol is already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Leave the holding set untouched.
    #[default]
    Abort,
    /// Replace the existing holding in place.
    Overwrite,
}

/// One user action, dispatched to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingCommand {
    Add {
        holding: NewHolding,
        on_conflict: ConflictPolicy,
    },
    Update {
        symbol: String,
        holding: HoldingUpdate,
    },
    Delete {
        symbol: String,
    },
}

/// Result of a command that did not fail.
#[derive(Debug, Clone)]
pub enum MutationOutcome {
    /// The set changed, was saved, and this view was published.
    Applied(PortfolioView),
    /// Add of a symbol already held, under [`ConflictPolicy::Abort`].
    Aborted { symbol: String },
    /// Delete of a symbol not held.
    Unchanged { symbol: String },
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied(_))
    }

    pub fn view(&self) -> Option<&PortfolioView> {
        match self {
            MutationOutcome::Applied(view) => Some(view),
            _ => None,
        }
    }
}

/// Result of a successful initial load.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub view: PortfolioView,
    pub rejected: Vec<RejectedRecord>,
}
