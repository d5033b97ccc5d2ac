use std::sync::Arc;

use crate::{
    api::shared::{ApiJson, UserBody},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use fintrack_core::auth::{AuthUser, ChangePasswordRequest, LoginRequest, SignupRequest};
use serde::Serialize;

#[derive(Serialize)]
struct PasswordChanged {
    message: &'static str,
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthUser>> {
    let user = state.auth_service.login(request)?;
    tracing::info!("User {} signed in", user.user_id);
    Ok(Json(user))
}

async fn signup(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> ApiResult<Json<AuthUser>> {
    let user = state.auth_service.signup(request).await?;
    tracing::info!("User {} signed up", user.user_id);
    Ok(Json(user))
}

async fn change_password(
    State(state): State<Arc<AppState>>,
    UserBody(user_id, request): UserBody<ChangePasswordRequest>,
) -> ApiResult<Json<PasswordChanged>> {
    state.auth_service.change_password(&user_id, request)?;
    Ok(Json(PasswordChanged {
        message: "Password updated successfully",
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/password", post(change_password))
}
