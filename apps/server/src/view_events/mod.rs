//! View publication bridge for the web server.
//!
//! The coordinator hands every recomputed view to [`WebViewPublisher`], which
//! forwards it to connected clients over the [`EventBus`](crate::events::EventBus).

mod sink;

pub use sink::WebViewPublisher;
