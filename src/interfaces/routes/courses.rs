use actix_web::web;

use crate::handlers::{courses, fallback::fallback};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/courses")
            .route(web::get().to(courses::get_courses))
            .route(web::post().to(courses::create_course))
            .default_service(web::route().to(fallback))
    );
}
