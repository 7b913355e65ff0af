#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use certtrack_backend::entities::certification::{Certification, CertificationInsert};
use certtrack_backend::entities::course::{Course, CourseInsert};
use certtrack_backend::entities::worker::{Worker, WorkerInsert};
use certtrack_backend::errors::AppError;
use certtrack_backend::repositories::{
    certification::CertificationRepository, course::CourseRepository, worker::WorkerRepository,
};

mock! {
    pub WorkerRepo {}

    #[async_trait]
    impl WorkerRepository for WorkerRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn list_workers(&self) -> Result<Vec<Worker>, AppError>;
        async fn create_worker(&self, worker: &WorkerInsert) -> Result<Worker, AppError>;
    }
}

mock! {
    pub CourseRepo {}

    #[async_trait]
    impl CourseRepository for CourseRepo {
        async fn list_courses(&self) -> Result<Vec<Course>, AppError>;
        async fn create_course(&self, course: &CourseInsert) -> Result<Course, AppError>;
    }
}

mock! {
    pub CertificationRepo {}

    #[async_trait]
    impl CertificationRepository for CertificationRepo {
        async fn list_certifications(&self) -> Result<Vec<Certification>, AppError>;
        async fn create_certification(
            &self,
            certification: &CertificationInsert,
        ) -> Result<Certification, AppError>;
        async fn list_expiring_before(
            &self,
            cutoff: DateTime<Utc>,
        ) -> Result<Vec<Certification>, AppError>;
    }
}
