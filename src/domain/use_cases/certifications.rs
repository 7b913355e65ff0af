use chrono::{Duration, Utc};
use validator::Validate;

use crate::{
    entities::certification::{Certification, NewCertification},
    errors::AppError,
    repositories::certification::CertificationRepository,
};

pub struct CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub certification_repo: R,
}

impl<R> CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub fn new(certification_repo: R) -> Self {
        CertificationHandler { certification_repo }
    }

    /// Lists all certifications
    pub async fn list_certifications(&self) -> Result<Vec<Certification>, AppError> {
        self.certification_repo.list_certifications().await
    }

    /// Creates a certification after validation, date normalization and
    /// defaulting
    pub async fn create_certification(
        &self,
        request: NewCertification,
    ) -> Result<Certification, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert()?;
        let certification = self.certification_repo.create_certification(&insert).await?;

        tracing::info!(
            certification_id = certification.id,
            worker_id = certification.worker_id,
            "Certification created"
        );
        Ok(certification)
    }

    /// Certifications whose expiry date falls at or before now + `days`.
    /// Negative offsets place the cutoff in the past.
    pub async fn list_expiring(&self, days: i64) -> Result<Vec<Certification>, AppError> {
        let cutoff = Utc::now() + Duration::days(days);
        self.certification_repo.list_expiring_before(cutoff).await
    }
}
