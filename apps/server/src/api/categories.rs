use std::sync::Arc;

use crate::{
    api::shared::{Deleted, UserBody, UserQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use fintrack_core::categories::{Category, NewCategory};

/// Names only, led by the "All Categories" pseudo-entry.
async fn list_category_names(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Vec<String>>> {
    let user_id = q.user_id()?;
    let names = state.category_service.get_category_names(&user_id)?;
    Ok(Json(names))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, new_category): UserBody<NewCategory>,
) -> ApiResult<Json<Category>> {
    let category = state
        .category_service
        .create_category(&user_id, &new_category.name)
        .await?;
    Ok(Json(category))
}

async fn delete_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Deleted>> {
    let user_id = q.user_id()?;
    state.category_service.delete_category(&user_id, &id).await?;
    Ok(Json(Deleted { id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/categories",
            get(list_category_names).post(create_category),
        )
        .route("/categories/{id}", delete(delete_category))
}
