use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use equitytrack_core::{
    errors::Error as CoreError,
    holdings::{Holding, HoldingUpdate, NewHolding},
    ConflictPolicy, HoldingCommand, MutationOutcome,
};

use crate::{
    error::{ApiError, ApiJson, ApiQuery, ApiResult},
    main_lib::AppState,
    models::{AddHoldingQuery, PortfolioResponse},
};

async fn list_holdings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Holding>>> {
    state.ensure_loaded()?;
    let holdings = state.coordinator.holdings().ok_or(CoreError::NotLoaded)?;
    Ok(Json(holdings.as_slice().to_vec()))
}

async fn add_holding(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<AddHoldingQuery>,
    ApiJson(holding): ApiJson<NewHolding>,
) -> ApiResult<Json<PortfolioResponse>> {
    let on_conflict = if q.overwrite {
        ConflictPolicy::Overwrite
    } else {
        ConflictPolicy::Abort
    };
    run(&state, HoldingCommand::Add { holding, on_conflict }).await
}

async fn update_holding(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    ApiJson(holding): ApiJson<HoldingUpdate>,
) -> ApiResult<Json<PortfolioResponse>> {
    run(&state, HoldingCommand::Update { symbol, holding }).await
}

async fn delete_holding(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<PortfolioResponse>> {
    run(&state, HoldingCommand::Delete { symbol }).await
}

/// Dispatches one command and answers with the resulting view.
async fn run(state: &AppState, command: HoldingCommand) -> ApiResult<Json<PortfolioResponse>> {
    state.ensure_loaded()?;
    let view = match state.coordinator.dispatch(command).await? {
        MutationOutcome::Applied(view) => view,
        MutationOutcome::Aborted { symbol } => {
            return Err(ApiError::Conflict(format!(
                "Holding '{}' already exists",
                symbol
            )))
        }
        MutationOutcome::Unchanged { .. } => state.coordinator.current_view()?,
    };
    Ok(Json(PortfolioResponse::from_view(
        &view,
        &state.currency_symbol,
    )))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holdings", get(list_holdings).post(add_holding))
        .route(
            "/holdings/{symbol}",
            put(update_holding).delete(delete_holding),
        )
}
