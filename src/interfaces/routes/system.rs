use actix_web::web;

use crate::handlers::{fallback::fallback, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(system::health_check))
            .default_service(web::route().to(fallback))
    );
}
