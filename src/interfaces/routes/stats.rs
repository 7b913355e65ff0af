use actix_web::web;

use crate::handlers::{fallback::fallback, stats};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/stats")
            .route(web::get().to(stats::get_stats))
            .default_service(web::route().to(fallback))
    );
}
