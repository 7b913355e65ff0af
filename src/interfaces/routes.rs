use actix_web::web;

use crate::handlers::{fallback::fallback, home::home};

mod certifications;
mod courses;
mod json_error;
mod stats;
mod system;
mod workers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(stats::config_routes)
            .configure(workers::config_routes)
            .configure(courses::config_routes)
            .configure(certifications::config_routes)
            .configure(system::config_routes)
            .default_service(web::route().to(fallback))
    );

    cfg.configure(json_error::config_routes);
}
