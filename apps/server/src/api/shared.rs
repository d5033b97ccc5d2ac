//! Request plumbing shared by the route modules.
//!
//! Reads carry the caller in a `userId` query parameter; writes carry it in
//! the JSON body next to the payload fields.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

/// `Json` whose rejections answer with the API error body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// JSON body of a write, split into the caller's `userId` and the payload.
///
/// A missing `userId` is reported before any problem with the payload.
#[derive(Debug)]
pub struct UserBody<T>(pub String, pub T);

impl<T: DeserializeOwned> UserBody<T> {
    pub fn from_json(mut body: Value) -> ApiResult<Self> {
        let user_id = body
            .as_object_mut()
            .and_then(|fields| fields.remove("userId"));
        let user_id = require_user_id(user_id.as_ref().and_then(Value::as_str))?;
        let payload = serde_json::from_value(body).map_err(|e| {
            ApiError::BadRequest(format!(
                "Failed to deserialize the JSON body into the target type: {}",
                e
            ))
        })?;
        Ok(UserBody(user_id, payload))
    }
}

impl<S, T> FromRequest<S> for UserBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(body) = ApiJson::<Value>::from_request(req, state).await?;
        Self::from_json(body)
    }
}

impl UserQuery {
    pub fn user_id(&self) -> ApiResult<String> {
        require_user_id(self.user_id.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: String,
}

pub fn require_user_id(user_id: Option<&str>) -> ApiResult<String> {
    match user_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ApiError::BadRequest("User ID is required".to_string())),
    }
}
