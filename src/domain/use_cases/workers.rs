use serde::Deserialize;
use validator::Validate;

use crate::{
    entities::certification::NewWorkerCertification,
    entities::worker::{NewWorker, Worker, WorkerWithCertifications},
    errors::AppError,
    repositories::{certification::CertificationRepository, worker::WorkerRepository},
};

/// Request body for worker creation: the worker itself plus any
/// certifications to record alongside it.
#[derive(Debug, Deserialize)]
pub struct NewWorkerRequest {
    pub worker: NewWorker,

    #[serde(default)]
    pub certifications: Vec<NewWorkerCertification>,
}

pub struct WorkerHandler<W, C>
where
    W: WorkerRepository,
    C: CertificationRepository,
{
    pub worker_repo: W,
    pub certification_repo: C,
}

impl<W, C> WorkerHandler<W, C>
where
    W: WorkerRepository,
    C: CertificationRepository,
{
    pub fn new(worker_repo: W, certification_repo: C) -> Self {
        WorkerHandler {
            worker_repo,
            certification_repo,
        }
    }

    /// Lists all workers
    pub async fn list_workers(&self) -> Result<Vec<Worker>, AppError> {
        self.worker_repo.list_workers().await
    }

    /// Creates a worker and then its certifications, one at a time in
    /// array order. Rows written before a failure remain committed; the
    /// caller only sees the error.
    pub async fn create_worker(
        &self,
        request: NewWorkerRequest,
    ) -> Result<WorkerWithCertifications, AppError> {
        request.worker.validate()?;

        let worker_insert = request.worker.prepare_for_insert()?;
        let worker = self.worker_repo.create_worker(&worker_insert).await?;

        let mut certifications = Vec::with_capacity(request.certifications.len());
        for item in request.certifications {
            let new_certification = item.into_certification(worker.id);
            new_certification.validate()?;

            let insert = new_certification.prepare_for_insert()?;
            let certification = self.certification_repo.create_certification(&insert).await?;
            certifications.push(certification);
        }

        tracing::info!(
            worker_id = worker.id,
            certifications = certifications.len(),
            "Worker created"
        );

        Ok(WorkerWithCertifications {
            worker,
            certifications,
        })
    }
}
