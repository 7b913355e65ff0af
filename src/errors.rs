use std::borrow::Cow;
use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use once_cell::sync::OnceCell;
use serde::Serialize;
use validator::ValidationErrors;

/// Whether 500 responses carry the real error detail. Set once at startup
/// from the configured environment; unset means hidden.
static EXPOSE_ERROR_DETAILS: OnceCell<bool> = OnceCell::new();

pub fn set_error_detail_exposure(expose: bool) {
    let _ = EXPOSE_ERROR_DETAILS.set(expose);
}

fn error_details_exposed() -> bool {
    EXPOSE_ERROR_DETAILS.get().copied().unwrap_or(false)
}

#[derive(Debug)]
pub enum AppError {
    Validation(Vec<FieldError>),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => {
                serde_json::json!({
                    "message": "Validation error",
                    "errors": errors
                })
            }
            AppError::NotFound(msg) => {
                serde_json::json!({ "message": msg })
            }
            AppError::Conflict(_) => {
                serde_json::json!({ "message": "Duplicate entry detected" })
            }
            AppError::Internal(detail) => {
                let error = if error_details_exposed() {
                    detail.clone()
                } else {
                    "Something went wrong".to_string()
                };
                serde_json::json!({
                    "message": "Internal server error",
                    "error": error
                })
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Validation failure for a single named field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }])
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        AppError::Validation(field_errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Unique constraint violated".into())
            }
            _ => AppError::Internal(format!("Database error: {}", err))
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
