//! JSON file storage implementation for EquityTrack.
//!
//! This crate implements the persistence trait defined in `equitytrack-core`
//! on top of two files in a data directory:
//! - `portfolio.json`: the holding set, as an array of holding records
//! - `historical.json`: the portfolio value series, as an array of `{date, value}`
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-json (this crate)
//!              │
//!              ▼
//!      data/portfolio.json
//!      data/historical.json
//! ```

pub mod errors;
pub mod portfolio;

pub use errors::StorageError;
pub use portfolio::{JsonPortfolioStore, HISTORY_FILE, PORTFOLIO_FILE};

// Re-export from equitytrack-core for convenience
pub use equitytrack_core::errors::{Error, PersistenceError, Result};
