mod repository;

pub use repository::{JsonPortfolioStore, HISTORY_FILE, PORTFOLIO_FILE};
