use actix_web::{web, HttpResponse, Responder};

use crate::{entities::course::NewCourse, errors::AppError, AppState};

pub async fn get_courses(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let courses = state.course_handler.list_courses().await?;

    Ok(HttpResponse::Ok().json(courses))
}

pub async fn create_course(
    state: web::Data<AppState>,
    payload: web::Json<NewCourse>,
) -> Result<impl Responder, AppError> {
    let course = state.course_handler.create_course(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(course))
}
