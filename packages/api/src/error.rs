use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::services::errors::game_service_errors::GameServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    GameService(#[from] GameServiceError),
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::GameService(GameServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::GameService(GameServiceError::GameNotFound) => StatusCode::NOT_FOUND,
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidPayload(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::GameService(GameServiceError::ValidationError(errors)) => json!({
                "error": "Validation failed",
                "violations": errors,
            }),
            // Store details stay in the logs
            ApiError::GameService(GameServiceError::RepositoryError(_)) => json!({
                "error": "Internal server error",
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
