//! Holdings module - record schema, holding model, the in-memory repository,
//! and the persistence contract.

mod holdings_model;
mod holdings_repository;
mod holdings_traits;

pub use holdings_model::*;
pub use holdings_repository::{HoldingRepository, LoadReport, RejectedRecord};
pub use holdings_traits::PortfolioStoreTrait;

#[cfg(test)]
mod holdings_model_tests;
#[cfg(test)]
mod holdings_repository_tests;
