use actix_web::{web, HttpResponse, Responder};

use crate::{errors::AppError, use_cases::workers::NewWorkerRequest, AppState};

pub async fn get_workers(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let workers = state.worker_handler.list_workers().await?;

    Ok(HttpResponse::Ok().json(workers))
}

pub async fn create_worker(
    state: web::Data<AppState>,
    payload: web::Json<NewWorkerRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.worker_handler.create_worker(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
