use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub const MISSING_REROLL_INPUT: &str = "Missing card data or theme";
pub const EMPTY_DECKLIST: &str = "Decklist is empty";

#[derive(Error, Debug)]
pub enum AppError {
    /// Client-caused; never retried.
    #[error("{0}")]
    Validation(String),

    #[error("Failed to connect to Scryfall API: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Failed to generate new card")]
    GenerationFailed,
}

impl AppError {
    pub fn validation(msg: &str) -> AppError {
        AppError::Validation(msg.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::GenerationFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::warn!("Rejected request: {}", message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
