mod domain;
mod interfaces;
mod infrastructure;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{dates, entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::db;

use repositories::sqlx_repo::{SqlxCertificationRepo, SqlxCourseRepo, SqlxWorkerRepo};
use use_cases::{
    certifications::CertificationHandler, courses::CourseHandler, stats::StatsHandler,
    workers::WorkerHandler,
};

pub type AppWorkerHandler = WorkerHandler<SqlxWorkerRepo, SqlxCertificationRepo>;
pub type AppCourseHandler = CourseHandler<SqlxCourseRepo>;
pub type AppCertificationHandler = CertificationHandler<SqlxCertificationRepo>;
pub type AppStatsHandler = StatsHandler<SqlxWorkerRepo, SqlxCourseRepo, SqlxCertificationRepo>;

pub struct AppState {
    pub worker_handler: AppWorkerHandler,
    pub course_handler: AppCourseHandler,
    pub certification_handler: AppCertificationHandler,
    pub stats_handler: AppStatsHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let worker_repo = SqlxWorkerRepo::new(pool.clone());
        let course_repo = SqlxCourseRepo::new(pool.clone());
        let certification_repo = SqlxCertificationRepo::new(pool);

        AppState {
            worker_handler: WorkerHandler::new(worker_repo.clone(), certification_repo.clone()),
            course_handler: CourseHandler::new(course_repo.clone()),
            certification_handler: CertificationHandler::new(certification_repo.clone()),
            stats_handler: StatsHandler::new(worker_repo, course_repo, certification_repo),
        }
    }
}
