//! Typed errors and HTTP mapping.
//!
//! The external contract recognizes two failure outcomes: not found (404,
//! empty body) and operation failure (500, error body). Client-side problems
//! (bad identifier, malformed payload, bad sort token) take the 500 path too;
//! the `code` field in the body keeps the causes distinct.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    #[error("invalid sort direction: {0}")]
    InvalidSort(String),
    #[error("payload: {0}")]
    Payload(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            AppError::InvalidId(_) => "invalid_identifier",
            AppError::InvalidSort(_) => "invalid_sort",
            AppError::Payload(_) => "invalid_payload",
            AppError::Db(_) => "database_error",
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404_with_empty_body() {
        let resp = AppError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(axum::http::header::CONTENT_TYPE),
            None,
            "404 must not carry a body"
        );
    }

    #[test]
    fn everything_else_is_500() {
        for err in [
            AppError::InvalidId("xyz".into()),
            AppError::InvalidSort("sideways".into()),
            AppError::Payload("expected an object".into()),
            AppError::Db(sqlx::Error::RowNotFound),
        ] {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn error_body_carries_code_and_message() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "invalid_identifier".into(),
                message: AppError::InvalidId("xyz".into()).to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "invalid_identifier");
        assert_eq!(json["error"]["message"], "invalid identifier: xyz");
    }
}
