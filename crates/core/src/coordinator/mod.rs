//! Mutation coordinator - applies holding commands and drives the
//! persist / recompute / publish cycle.

mod coordinator_model;
mod coordinator_service;

pub use coordinator_model::*;
pub use coordinator_service::PortfolioCoordinator;
