
use actix_web::body::to_bytes;
use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use serde_json::Value;
use validator::Validate;

use certtrack_backend::errors::AppError;
use test_data::new_course;

async fn body_json(err: &AppError) -> (StatusCode, Value) {
    let response = err.error_response();
    let status = response.status();
    let body = to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[actix_rt::test]
async fn validation_errors_render_400_with_field_list() {
    let invalid = new_course("");
    let err = AppError::from(invalid.validate().unwrap_err());

    let (status, json) = body_json(&err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Validation error");
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "name"));
}

#[actix_rt::test]
async fn conflict_renders_fixed_duplicate_message() {
    let err = AppError::Conflict("certificate_number taken".into());

    let (status, json) = body_json(&err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Duplicate entry detected");
}

#[actix_rt::test]
async fn not_found_carries_its_message() {
    let err = AppError::NotFound("Route not found: GET /api/nope".into());

    let (status, json) = body_json(&err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Route not found: GET /api/nope");
}

#[actix_rt::test]
async fn internal_errors_hide_detail_unless_exposure_is_enabled() {
    let err = AppError::Internal("connection refused".into());

    let (status, json) = body_json(&err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Internal server error");
    assert_eq!(json["error"], "Something went wrong");
}

#[actix_rt::test]
async fn invalid_field_reports_the_named_field() {
    let err = AppError::invalid_field("issuedDate", "Invalid date: 'soon'");

    let (status, json) = body_json(&err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["field"], "issuedDate");
}
