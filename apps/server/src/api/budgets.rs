use std::sync::Arc;

use crate::{
    api::shared::{require_user_id, Deleted, UserBody, UserQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use fintrack_core::budgets::{Budget, BudgetOverview, BudgetUpdate, IncomeUpdate, NewBudget};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverviewQuery {
    user_id: Option<String>,
    month: Option<String>,
}

async fn get_overview(
    State(state): State<Arc<AppState>>,
    Query(q): Query<OverviewQuery>,
) -> ApiResult<Json<BudgetOverview>> {
    let user_id = require_user_id(q.user_id.as_deref())?;
    let month = q.month.as_deref().map(str::trim).filter(|m| !m.is_empty());
    let overview = state.budget_service.get_overview(&user_id, month)?;
    Ok(Json(overview))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, new_budget): UserBody<NewBudget>,
) -> ApiResult<Json<Budget>> {
    let budget = state
        .budget_service
        .create_budget(&user_id, new_budget)
        .await?;
    Ok(Json(budget))
}

async fn update_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserBody(user_id, update): UserBody<BudgetUpdate>,
) -> ApiResult<Json<Budget>> {
    let budget = state
        .budget_service
        .update_budget(&user_id, &id, update)
        .await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Deleted>> {
    let user_id = q.user_id()?;
    let id = state.budget_service.delete_budget(&user_id, &id).await?;
    Ok(Json(Deleted { id }))
}

async fn set_income(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, update): UserBody<IncomeUpdate>,
) -> ApiResult<Json<IncomeUpdate>> {
    let total_income = state
        .budget_service
        .set_income(&user_id, update.total_income)
        .await?;
    Ok(Json(IncomeUpdate { total_income }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(get_overview).post(create_budget))
        .route("/budgets/income", put(set_income))
        .route("/budgets/{id}", put(update_budget).delete(delete_budget))
}
