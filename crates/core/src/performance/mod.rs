//! Value change of the portfolio over the historical series.

mod history_calculator;
mod history_model;

pub use history_calculator::*;
pub use history_model::*;
