use std::sync::Arc;

use crate::{
    api::shared::{UserBody, UserQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fintrack_core::settings::{SettingsUpdate, UserSettings};

async fn get_settings(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<UserSettings>> {
    let user_id = q.user_id()?;
    let s = state.settings_service.get_settings(&user_id)?;
    Ok(Json(s))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, update): UserBody<SettingsUpdate>,
) -> ApiResult<Json<UserSettings>> {
    let s = state
        .settings_service
        .update_settings(&user_id, update)
        .await?;
    Ok(Json(s))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
