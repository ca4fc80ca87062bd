use std::sync::Arc;

use equitytrack_core::{events::ViewPublisher, holdings::PortfolioStoreTrait, PortfolioCoordinator};
use equitytrack_storage_json::JsonPortfolioStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, error::ApiError, events::EventBus, view_events::WebViewPublisher};

pub struct AppState {
    pub coordinator: Arc<PortfolioCoordinator>,
    pub event_bus: EventBus,
    pub currency_symbol: String,
    /// Message of the failed initial load; portfolio routes answer 503 while set.
    pub load_error: Option<String>,
}

impl AppState {
    /// Fails with the initial-load message when nothing could be loaded.
    pub fn ensure_loaded(&self) -> Result<(), ApiError> {
        match &self.load_error {
            Some(message) => Err(ApiError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("ET_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Data directory in use: {}", config.data_dir.display());

    let store: Arc<dyn PortfolioStoreTrait> = Arc::new(JsonPortfolioStore::new(&config.data_dir));
    let event_bus = EventBus::new(256);
    let publisher: Arc<dyn ViewPublisher> = Arc::new(WebViewPublisher::new(
        event_bus.clone(),
        config.currency_symbol.clone(),
    ));
    let coordinator = Arc::new(PortfolioCoordinator::new(store, publisher));

    let load_error = match coordinator.initialize().await {
        Ok(summary) => {
            for rejected in &summary.rejected {
                tracing::warn!(
                    "Skipped holding record {} ({}): {}",
                    rejected.index,
                    rejected.symbol.as_deref().unwrap_or("no symbol"),
                    rejected.reason
                );
            }
            tracing::info!(
                "Portfolio loaded: {} holdings, {} rejected",
                summary.view.holdings.len(),
                summary.rejected.len()
            );
            None
        }
        Err(e) => {
            tracing::error!("Initial portfolio load failed: {}", e);
            Some(e.to_string())
        }
    };

    Ok(Arc::new(AppState {
        coordinator,
        event_bus,
        currency_symbol: config.currency_symbol.clone(),
        load_error,
    }))
}
