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
use fintrack_core::goals::{Contribution, Goal, GoalUpdate, NewGoal};

async fn get_goals(
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Vec<Goal>>> {
    let user_id = q.user_id()?;
    let goals = state.goal_service.get_goals(&user_id)?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, goal): UserBody<NewGoal>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.create_goal(&user_id, goal).await?;
    Ok(Json(g))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserBody(user_id, update): UserBody<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let g = state.goal_service.update_goal(&user_id, &id, update).await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(q): Query<UserQuery>,
) -> ApiResult<Json<Deleted>> {
    let user_id = q.user_id()?;
    let id = state.goal_service.delete_goal(&user_id, &id).await?;
    Ok(Json(Deleted { id }))
}

async fn contribute(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserBody(user_id, contribution): UserBody<Contribution>,
) -> ApiResult<Json<Goal>> {
    let g = state
        .goal_service
        .contribute(&user_id, &id, contribution.amount)
        .await?;
    Ok(Json(g))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{id}", put(update_goal).delete(delete_goal))
        .route("/goals/{id}/contribute", post(contribute))
}
