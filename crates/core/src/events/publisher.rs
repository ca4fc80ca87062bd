//! View publisher trait and implementations.

use std::sync::{Arc, Mutex};

use super::{PortfolioView, ViewFailure};

/// Trait for receiving recomputed views.
///
/// # Design Rules
///
/// - `publish()` runs inside the mutation cycle and must not block on IO
/// - The core makes no assumption about whether rendering succeeded
pub trait ViewPublisher: Send + Sync {
    /// Hand over a freshly computed view.
    fn publish(&self, view: &PortfolioView);

    /// Report a failed cycle.
    ///
    /// Default implementation ignores the failure.
    fn publish_failure(&self, _failure: &ViewFailure) {}
}

/// No-op implementation for tests or contexts that don't render.
#[derive(Clone, Default)]
pub struct NoOpViewPublisher;

impl ViewPublisher for NoOpViewPublisher {
    fn publish(&self, _view: &PortfolioView) {}
}

/// Mock publisher for testing - collects published views and failures.
#[derive(Clone, Default)]
pub struct MockViewPublisher {
    views: Arc<Mutex<Vec<PortfolioView>>>,
    failures: Arc<Mutex<Vec<ViewFailure>>>,
}

impl MockViewPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all published views.
    pub fn views(&self) -> Vec<PortfolioView> {
        self.views.lock().unwrap().clone()
    }

    /// Returns the most recently published view.
    pub fn last_view(&self) -> Option<PortfolioView> {
        self.views.lock().unwrap().last().cloned()
    }

    /// Returns all reported failures.
    pub fn failures(&self) -> Vec<ViewFailure> {
        self.failures.lock().unwrap().clone()
    }

    /// Returns the number of published views.
    pub fn len(&self) -> usize {
        self.views.lock().unwrap().len()
    }

    /// Returns true if no view has been published.
    pub fn is_empty(&self) -> bool {
        self.views.lock().unwrap().is_empty()
    }
}

impl ViewPublisher for MockViewPublisher {
    fn publish(&self, view: &PortfolioView) {
        self.views.lock().unwrap().push(view.clone());
    }

    fn publish_failure(&self, failure: &ViewFailure) {
        self.failures.lock().unwrap().push(failure.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::FailureScope;
    use crate::holdings::HoldingSet;

    fn empty_view() -> PortfolioView {
        PortfolioView::compute(Arc::new(HoldingSet::new()), Arc::new(Vec::new()))
    }

    #[test]
    fn test_noop_publisher_does_not_panic() {
        let publisher = NoOpViewPublisher;
        publisher.publish(&empty_view());
        publisher.publish_failure(&ViewFailure::new(FailureScope::Add, Some("AAPL"), "boom"));
    }

    #[test]
    fn test_mock_publisher_collects_views() {
        let publisher = MockViewPublisher::new();
        assert!(publisher.is_empty());

        publisher.publish(&empty_view());
        publisher.publish(&empty_view());
        assert_eq!(publisher.len(), 2);
        assert!(publisher.last_view().unwrap().rows.is_empty());

        publisher.publish_failure(&ViewFailure::new(FailureScope::Delete, None, "disk full"));
        let failures = publisher.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].scope, FailureScope::Delete);
        assert_eq!(publisher.len(), 2);
    }

    #[test]
    fn test_failure_serialization() {
        let failure = ViewFailure::new(FailureScope::InitialLoad, None, "no data");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["scope"], "initial_load");
        assert_eq!(json["message"], "no data");
    }
}
