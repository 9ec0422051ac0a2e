use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    InvalidJson,
    NotFound,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl AppError {
    pub fn status(self) -> StatusCode {
        match self {
            AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AppError::InvalidJson => "Invalid JSON",
            AppError::NotFound => "Not found",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message(),
        });

        (self.status(), body).into_response()
    }
}
