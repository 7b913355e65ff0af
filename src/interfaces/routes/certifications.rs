use actix_web::web;

use crate::handlers::{certifications, fallback::fallback};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/certifications/expiring/{days}")
            .route(web::get().to(certifications::get_expiring_certifications))
            .default_service(web::route().to(fallback))
    );

    cfg.service(
        web::resource("/certifications")
            .route(web::get().to(certifications::get_certifications))
            .route(web::post().to(certifications::create_certification))
            .default_service(web::route().to(fallback))
    );
}
