use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fintrack_core::errors::{DatabaseError, Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Validation(_) | CoreError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
        CoreError::NotFound(_) | CoreError::Database(DatabaseError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        CoreError::ConstraintViolation(_)
        | CoreError::Database(DatabaseError::UniqueViolation(_))
        | CoreError::Database(DatabaseError::ForeignKeyViolation(_)) => StatusCode::CONFLICT,
        CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        CoreError::Database(_) | CoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing text; validation messages are shown without their prefix.
fn core_message(err: &CoreError) -> String {
    match err {
        CoreError::Validation(ValidationError::InvalidInput(msg)) => msg.clone(),
        CoreError::Validation(inner) => inner.to_string(),
        CoreError::ConstraintViolation(msg) => msg.clone(),
        _ => err.to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => (core_status(e), core_message(e)),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
