use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Ошибки HTTP-обработчиков
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unknown catalog category '{0}'")]
    UnknownCategory(String),

    #[error("failed to serialize catalog: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
