use equitytrack_core::events::{PortfolioView, ViewFailure, ViewPublisher};
use serde::Serialize;
use serde_json::Value;

use crate::events::{EventBus, ServerEvent, PORTFOLIO_UPDATE_COMPLETE, PORTFOLIO_UPDATE_ERROR};
use crate::models::PortfolioResponse;

/// Publishes views and cycle failures as server events.
///
/// Runs inside the mutation cycle: serializing and sending on a broadcast
/// channel never waits on a client.
pub struct WebViewPublisher {
    event_bus: EventBus,
    currency_symbol: String,
}

impl WebViewPublisher {
    pub fn new(event_bus: EventBus, currency_symbol: impl Into<String>) -> Self {
        Self {
            event_bus,
            currency_symbol: currency_symbol.into(),
        }
    }

    fn emit(&self, name: &'static str, payload: &impl Serialize) {
        match serde_json::to_value(payload) {
            Ok(value) => self
                .event_bus
                .publish(ServerEvent::with_payload(name, value)),
            Err(err) => {
                tracing::error!("Failed to serialize {} payload: {}", name, err);
                self.event_bus
                    .publish(ServerEvent::with_payload(name, Value::Null));
            }
        }
    }
}

impl ViewPublisher for WebViewPublisher {
    fn publish(&self, view: &PortfolioView) {
        tracing::debug!(
            "Publishing view of {} holdings",
            view.holdings.len()
        );
        let response = PortfolioResponse::from_view(view, &self.currency_symbol);
        self.emit(PORTFOLIO_UPDATE_COMPLETE, &response);
    }

    fn publish_failure(&self, failure: &ViewFailure) {
        self.emit(PORTFOLIO_UPDATE_ERROR, failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equitytrack_core::events::FailureScope;
    use equitytrack_core::holdings::HoldingSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_views_and_failures_reach_subscribers() {
        let bus = EventBus::new(8);
        let mut receiver = bus.subscribe();
        let publisher = WebViewPublisher::new(bus, "$");

        let view = PortfolioView::compute(Arc::new(HoldingSet::new()), Arc::new(Vec::new()));
        publisher.publish(&view);
        publisher.publish_failure(&ViewFailure::new(
            FailureScope::Update,
            Some("MSFT"),
            "Holding 'MSFT' not found",
        ));

        let complete = receiver.recv().await.unwrap();
        assert_eq!(complete.name, PORTFOLIO_UPDATE_COMPLETE);
        let payload = complete.payload.unwrap();
        assert_eq!(payload["summary"]["totalValue"], "$0.00");
        assert_eq!(payload["summary"]["gainPercentage"], "0.00%");

        let error = receiver.recv().await.unwrap();
        assert_eq!(error.name, PORTFOLIO_UPDATE_ERROR);
        let payload = error.payload.unwrap();
        assert_eq!(payload["scope"], "update");
        assert_eq!(payload["symbol"], "MSFT");
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let publisher = WebViewPublisher::new(EventBus::new(1), "DH ");
        let view = PortfolioView::compute(Arc::new(HoldingSet::new()), Arc::new(Vec::new()));
        publisher.publish(&view);
    }
}
