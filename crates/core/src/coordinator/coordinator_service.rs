use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error, info};
use tokio::sync::Mutex;

use super::coordinator_model::{ConflictPolicy, HoldingCommand, LoadSummary, MutationOutcome};
use crate::errors::{Error, Result};
use crate::events::{FailureScope, PortfolioView, ViewFailure, ViewPublisher};
use crate::holdings::{
    normalize_symbol, HistoricalPoint, HoldingRepository, HoldingSet, HoldingUpdate, NewHolding,
    PortfolioStoreTrait,
};

/// Owns the holding set and runs every mutation cycle.
///
/// A cycle is: build the next set, range-check it and compute its view,
/// save it, swap it into the repository, publish the view. Cycles are serialized; a failed save
/// leaves the repository and the last published view untouched.
pub struct PortfolioCoordinator {
    repository: HoldingRepository,
    history: RwLock<Arc<Vec<HistoricalPoint>>>,
    store: Arc<dyn PortfolioStoreTrait>,
    publisher: Arc<dyn ViewPublisher>,
    cycle: Mutex<()>,
}

impl PortfolioCoordinator {
    /// Creates a coordinator with nothing loaded yet.
    pub fn new(store: Arc<dyn PortfolioStoreTrait>, publisher: Arc<dyn ViewPublisher>) -> Self {
        Self {
            repository: HoldingRepository::new(),
            history: RwLock::new(Arc::new(Vec::new())),
            store,
            publisher,
            cycle: Mutex::new(()),
        }
    }

    /// Loads holdings and history from the store and publishes the first view.
    ///
    /// On failure nothing is loaded, so every later command answers
    /// `Error::NotLoaded` until a load succeeds.
    pub async fn initialize(&self) -> Result<LoadSummary> {
        let _cycle = self.cycle.lock().await;

        let loaded = async {
            let records = self.store.load_holdings().await?;
            let history = self.store.load_history().await?;
            Ok::<_, Error>((records, history))
        }
        .await;

        let (records, history) = match loaded {
            Ok(data) => data,
            Err(e) => {
                error!("Failed to load portfolio data: {}", e);
                self.publisher
                    .publish_failure(&ViewFailure::new(FailureScope::InitialLoad, None, e.to_string()));
                return Err(e);
            }
        };

        let report = self.repository.load(records);
        let history = Arc::new(history);
        self.set_history(history.clone());

        info!(
            "Loaded {} holdings and {} history points",
            report.holdings.len(),
            history.len()
        );

        let view = PortfolioView::compute(report.holdings, history);
        self.publisher.publish(&view);

        Ok(LoadSummary {
            view,
            rejected: report.rejected,
        })
    }

    /// Current holding set, or `None` before a successful load.
    pub fn holdings(&self) -> Option<Arc<HoldingSet>> {
        self.repository.get()
    }

    pub fn history(&self) -> Arc<Vec<HistoricalPoint>> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.repository.is_loaded()
    }

    /// Recomputes the view of the current set.
    pub fn current_view(&self) -> Result<PortfolioView> {
        let holdings = self.repository.require()?;
        Ok(PortfolioView::compute(holdings, self.history()))
    }

    /// Runs one command through the mutation cycle.
    pub async fn dispatch(&self, command: HoldingCommand) -> Result<MutationOutcome> {
        match command {
            HoldingCommand::Add {
                holding,
                on_conflict,
            } => self.add_holding(holding, on_conflict).await,
            HoldingCommand::Update { symbol, holding } => self
                .update_holding(&symbol, holding)
                .await
                .map(MutationOutcome::Applied),
            HoldingCommand::Delete { symbol } => self.delete_holding(&symbol).await,
        }
    }

    /// Appends a holding, or resolves an existing symbol per `on_conflict`.
    pub async fn add_holding(
        &self,
        new_holding: NewHolding,
        on_conflict: ConflictPolicy,
    ) -> Result<MutationOutcome> {
        let symbol = normalize_symbol(&new_holding.symbol);
        let _cycle = self.cycle.lock().await;

        let result = async {
            let holding = new_holding.into_holding()?;
            let current = self.repository.require()?;

            let next = match (current.position(&holding.symbol), on_conflict) {
                (Some(_), ConflictPolicy::Abort) => {
                    debug!("{} already held, add aborted", holding.symbol);
                    return Ok(MutationOutcome::Aborted {
                        symbol: holding.symbol,
                    });
                }
                (Some(idx), ConflictPolicy::Overwrite) => {
                    debug!("Overwriting {} at position {}", holding.symbol, idx);
                    current.with_replaced(idx, holding)
                }
                (None, _) => current.with_appended(holding),
            };

            self.commit(next).await.map(MutationOutcome::Applied)
        }
        .await;

        self.report(FailureScope::Add, &symbol, result)
    }

    /// Replaces every non-key field of an existing holding.
    pub async fn update_holding(
        &self,
        symbol: &str,
        update: HoldingUpdate,
    ) -> Result<PortfolioView> {
        let symbol = normalize_symbol(symbol);
        let _cycle = self.cycle.lock().await;

        let result = async {
            let current = self.repository.require()?;
            let idx = current
                .position(&symbol)
                .ok_or_else(|| Error::NotFound(symbol.clone()))?;

            let next = current.with_replaced(idx, update.into_holding(&symbol));
            self.commit(next).await
        }
        .await;

        self.report(FailureScope::Update, &symbol, result)
    }

    /// Removes a holding. Deleting a symbol that is not held changes nothing.
    pub async fn delete_holding(&self, symbol: &str) -> Result<MutationOutcome> {
        let symbol = normalize_symbol(symbol);
        let _cycle = self.cycle.lock().await;

        let result = async {
            let current = self.repository.require()?;
            let Some(idx) = current.position(&symbol) else {
                debug!("{} not held, nothing to delete", symbol);
                return Ok(MutationOutcome::Unchanged {
                    symbol: symbol.clone(),
                });
            };

            self.commit(current.with_removed(idx))
                .await
                .map(MutationOutcome::Applied)
        }
        .await;

        self.report(FailureScope::Delete, &symbol, result)
    }

    /// Checks and computes the view of `next`, saves it, then swaps it in
    /// and publishes. Nothing is saved unless the view could be built.
    async fn commit(&self, next: HoldingSet) -> Result<PortfolioView> {
        next.check_range()?;
        let holdings = Arc::new(next);
        let view = PortfolioView::compute(holdings.clone(), self.history());

        self.store.save_holdings(&holdings).await?;

        self.repository.replace(holdings);
        debug!("Committed holding set of {} holdings", view.holdings.len());

        self.publisher.publish(&view);
        Ok(view)
    }

    fn report<T>(&self, scope: FailureScope, symbol: &str, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            error!("Failed to {} {}: {}", scope, symbol, e);
            self.publisher
                .publish_failure(&ViewFailure::new(scope, Some(symbol), e.to_string()));
        }
        result
    }

    fn set_history(&self, history: Arc<Vec<HistoricalPoint>>) {
        *self
            .history
            .write()
            .unwrap_or_else(PoisonError::into_inner) = history;
    }
}
