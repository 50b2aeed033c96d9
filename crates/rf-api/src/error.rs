//! # ApiError
//!
//! Maps core failures to HTTP responses. Body shape:
//! `{ "status": "fail", "message": "..." }`.

use crate::translator;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use rf_core::error::ForumError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Forum(#[from] ForumError),

    /// No owner identity was supplied by the upstream auth layer.
    #[error("Missing authentication")]
    Unauthenticated,
}

impl ApiError {
    /// User-facing message. Validation codes go through the translation table.
    pub fn message(&self) -> String {
        match self {
            ApiError::Forum(ForumError::Validation(err)) => translator::translate(&err.code()).to_string(),
            ApiError::Forum(ForumError::NotFound(message))
            | ApiError::Forum(ForumError::Authorization(message)) => message.clone(),
            ApiError::Unauthenticated => self.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forum(ForumError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Forum(ForumError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Forum(ForumError::Authorization(_)) => StatusCode::FORBIDDEN,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = self.message();
        tracing::warn!(status = status.as_u16(), error = %self, %message, "request rejected");

        HttpResponse::build(status).json(json!({
            "status": "fail",
            "message": message,
        }))
    }
}
