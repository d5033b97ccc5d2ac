use std::sync::Arc;

use crate::{api::shared::UserQuery, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fintrack_core::dashboard::DashboardOverview;

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<DashboardOverview>> {
    let user_id = q.user_id()?;
    let overview = state.dashboard_service.get_overview(&user_id)?;
    Ok(Json(overview))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
