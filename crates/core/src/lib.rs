//! EquityTrack Core - Holdings, aggregation, and the mutation cycle.
//!
//! This crate contains the business logic of the portfolio tracker.
//! It is storage-agnostic: persistence is reached through
//! [`holdings::PortfolioStoreTrait`], implemented by the `storage-json` crate,
//! and rendering through [`events::ViewPublisher`], implemented by the runtime.

pub mod constants;
pub mod coordinator;
pub mod errors;
pub mod events;
pub mod holdings;
pub mod performance;
pub mod portfolio;
pub mod utils;

// Re-export the types every caller touches
pub use coordinator::{ConflictPolicy, HoldingCommand, MutationOutcome, PortfolioCoordinator};
pub use holdings::{HistoricalPoint, Holding, HoldingRecord, HoldingSet, NewHolding};
pub use portfolio::{PortfolioMetrics, SectorAllocationEntry};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
