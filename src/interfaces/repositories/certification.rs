use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

use crate::{
    entities::certification::{Certification, CertificationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificationRepo,
};

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn list_certifications(&self) -> Result<Vec<Certification>, AppError>;
    async fn create_certification(
        &self,
        certification: &CertificationInsert,
    ) -> Result<Certification, AppError>;
    /// Certifications with a non-NULL expiry date at or before the cutoff.
    async fn list_expiring_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Certification>, AppError>;
}

impl SqlxCertificationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCertificationRepo { pool }
    }
}

const CERTIFICATION_COLUMNS: &str = "id, worker_id, course_id, name, certificate_number, \
     issued_date, expiry_date, status, created_at";

#[async_trait]
impl CertificationRepository for SqlxCertificationRepo {
    async fn list_certifications(&self) -> Result<Vec<Certification>, AppError> {
        let certifications = sqlx::query_as::<_, Certification>(&format!(
            "SELECT {CERTIFICATION_COLUMNS} FROM certifications ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(certifications)
    }

    async fn create_certification(
        &self,
        certification: &CertificationInsert,
    ) -> Result<Certification, AppError> {
        let created = sqlx::query_as::<_, Certification>(&format!(
            r#"
            INSERT INTO certifications
                (worker_id, course_id, name, certificate_number,
                 issued_date, expiry_date, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {CERTIFICATION_COLUMNS}
            "#
        ))
        .bind(certification.worker_id)
        .bind(certification.course_id)
        .bind(&certification.name)
        .bind(&certification.certificate_number)
        .bind(certification.issued_date)
        .bind(certification.expiry_date)
        .bind(&certification.status)
        .bind(certification.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Certificate number already exists".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(created)
    }

    async fn list_expiring_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Certification>, AppError> {
        let certifications = sqlx::query_as::<_, Certification>(&format!(
            "SELECT {CERTIFICATION_COLUMNS} FROM certifications \
             WHERE expiry_date <= $1 ORDER BY expiry_date"
        ))
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(certifications)
    }
}
