pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
mod main_lib;
mod view_events;

pub use main_lib::{build_state, init_tracing, AppState};
pub use view_events::WebViewPublisher;
