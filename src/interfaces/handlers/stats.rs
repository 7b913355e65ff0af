use actix_web::{web, HttpResponse, Responder};

use crate::{errors::AppError, AppState};

pub async fn get_stats(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let stats = state.stats_handler.dashboard_stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}
