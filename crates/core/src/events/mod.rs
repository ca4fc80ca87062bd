//! View publication boundary.
//!
//! After every successful load or mutation the coordinator recomputes a
//! [`PortfolioView`] and hands it to a [`ViewPublisher`]. Runtime adapters
//! implement the publisher to render or forward the view.

mod portfolio_view;
mod publisher;

pub use portfolio_view::*;
pub use publisher::*;
