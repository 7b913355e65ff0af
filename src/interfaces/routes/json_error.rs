use actix_web::web;

use crate::errors::{AppError, FieldError};

/// Malformed or incomplete JSON bodies are reported the same way schema
/// failures are: 400 with a "Validation error" message and a field list.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(vec![FieldError {
            field: "body".to_string(),
            message: err.to_string(),
        }])
        .into()
    }));
}
