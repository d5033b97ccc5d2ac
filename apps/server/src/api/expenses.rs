use std::sync::Arc;

use crate::{
    api::shared::{require_user_id, Deleted, UserBody, UserQuery},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use chrono::NaiveDate;
use fintrack_core::expenses::{Expense, ExpenseFilter, ExpenseUpdate, NewExpense};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseQuery {
    user_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    category: Option<String>,
    search: Option<String>,
}

fn parse_date_param(name: &str, value: Option<String>) -> ApiResult<Option<NaiveDate>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("Invalid {} '{}'", name, raw))),
    }
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ExpenseQuery>,
) -> ApiResult<Json<Vec<Expense>>> {
    let user_id = require_user_id(q.user_id.as_deref())?;
    let filter = ExpenseFilter {
        start_date: parse_date_param("startDate", q.start_date)?,
        end_date: parse_date_param("endDate", q.end_date)?,
        category: q.category,
        search: q.search,
    };
    let expenses = state.expense_service.get_expenses(&user_id, filter)?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, new_expense): UserBody<NewExpense>,
) -> ApiResult<Json<Expense>> {
    let expense = state
        .expense_service
        .create_expense(&user_id, new_expense)
        .await?;
    Ok(Json(expense))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserBody(user_id, update): UserBody<ExpenseUpdate>,
) -> ApiResult<Json<Expense>> {
    let expense = state
        .expense_service
        .update_expense(&user_id, &id, update)
        .await?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Deleted>> {
    let user_id = q.user_id()?;
    let id = state.expense_service.delete_expense(&user_id, &id).await?;
    Ok(Json(Deleted { id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", put(update_expense).delete(delete_expense))
}
