use actix_web::web;

use crate::handlers::{fallback::fallback, workers};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/workers")
            .route(web::get().to(workers::get_workers))
            .route(web::post().to(workers::create_worker))
            .default_service(web::route().to(fallback))
    );
}
