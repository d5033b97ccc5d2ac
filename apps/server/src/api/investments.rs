use std::sync::Arc;

use crate::{
    api::shared::{Deleted, UserBody, UserQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use fintrack_core::{
    investments::{Holding, HoldingUpdate, NewHolding, PortfolioSummary},
    portfolio::{PortfolioSnapshot, RefreshResult},
};
use serde::Deserialize;

/// Body of a refresh request; only the caller is needed.
#[derive(Debug, Deserialize)]
struct Empty {}

async fn get_holdings(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Vec<Holding>>> {
    let user_id = q.user_id()?;
    let holdings = state.holding_service.get_holdings(&user_id)?;
    Ok(Json(holdings))
}

async fn create_holding(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, new_holding): UserBody<NewHolding>,
) -> ApiResult<Json<Holding>> {
    let holding = state
        .holding_service
        .create_holding(&user_id, new_holding)
        .await?;
    Ok(Json(holding))
}

async fn update_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserBody(user_id, update): UserBody<HoldingUpdate>,
) -> ApiResult<Json<Holding>> {
    let holding = state
        .holding_service
        .update_holding(&user_id, &id, update)
        .await?;
    Ok(Json(holding))
}

async fn delete_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Deleted>> {
    let user_id = q.user_id()?;
    let id = state.holding_service.delete_holding(&user_id, &id).await?;
    Ok(Json(Deleted { id }))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Vec<PortfolioSnapshot>>> {
    let user_id = q.user_id()?;
    let history = state.portfolio_service.get_history(&user_id)?;
    Ok(Json(history))
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<PortfolioSummary>> {
    let user_id = q.user_id()?;
    let summary = state.holding_service.get_summary(&user_id)?;
    Ok(Json(summary))
}

async fn refresh_prices(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, _): UserBody<Empty>,
) -> ApiResult<Json<RefreshResult>> {
    let result = state.portfolio_service.refresh_prices(&user_id).await?;
    tracing::info!(
        "Refreshed {} holdings for {}, value {}",
        result.holdings.len(),
        user_id,
        result.history.value
    );
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(get_holdings).post(create_holding))
        .route("/investments/history", get(get_history))
        .route("/investments/summary", get(get_summary))
        .route("/investments/refresh", post(refresh_prices))
        .route(
            "/investments/{id}",
            put(update_holding).delete(delete_holding),
        )
}
