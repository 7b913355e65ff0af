use actix_web::{web, HttpResponse, Responder};

use crate::{entities::certification::NewCertification, errors::AppError, AppState};

pub async fn get_certifications(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let certifications = state.certification_handler.list_certifications().await?;

    Ok(HttpResponse::Ok().json(certifications))
}

pub async fn create_certification(
    state: web::Data<AppState>,
    payload: web::Json<NewCertification>,
) -> Result<impl Responder, AppError> {
    let certification = state
        .certification_handler
        .create_certification(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(certification))
}

pub async fn get_expiring_certifications(
    state: web::Data<AppState>,
    days: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let certifications = state
        .certification_handler
        .list_expiring(days.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(certifications))
}
