use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dates::parse_optional_date_time;
use crate::errors::AppError;

pub const DEFAULT_STATUS: &str = "active";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: i32,
    pub worker_id: i32,
    pub course_id: Option<i32>,
    pub name: String,
    pub certificate_number: String,
    pub issued_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCertification {
    pub worker_id: i32,

    pub course_id: Option<i32>,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Certificate number must be 1-100 characters"))]
    pub certificate_number: String,

    pub issued_date: Option<String>,
    pub expiry_date: Option<String>,
    pub status: Option<String>,
}

/// Certification item nested under a worker-creation request. The worker id
/// is not known until the worker row exists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkerCertification {
    pub course_id: Option<i32>,
    pub name: String,
    pub certificate_number: String,
    pub issued_date: Option<String>,
    pub expiry_date: Option<String>,
    pub status: Option<String>,
}

impl NewWorkerCertification {
    pub fn into_certification(self, worker_id: i32) -> NewCertification {
        NewCertification {
            worker_id,
            course_id: self.course_id,
            name: self.name,
            certificate_number: self.certificate_number,
            issued_date: self.issued_date,
            expiry_date: self.expiry_date,
            status: self.status,
        }
    }
}

#[derive(Debug)]
pub struct CertificationInsert {
    pub worker_id: i32,
    pub course_id: Option<i32>,
    pub name: String,
    pub certificate_number: String,
    pub issued_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewCertification {
    /// Normalizes dates and applies defaults: a missing issue date becomes
    /// now, a missing status becomes "active", a missing expiry stays NULL.
    pub fn prepare_for_insert(&self) -> Result<CertificationInsert, AppError> {
        let issued_date = parse_optional_date_time("issuedDate", self.issued_date.as_deref())?
            .unwrap_or_else(Utc::now);
        let expiry_date = parse_optional_date_time("expiryDate", self.expiry_date.as_deref())?;

        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STATUS)
            .to_string();

        Ok(CertificationInsert {
            worker_id: self.worker_id,
            course_id: self.course_id,
            name: self.name.clone(),
            certificate_number: self.certificate_number.clone(),
            issued_date,
            expiry_date,
            status,
            created_at: Utc::now(),
        })
    }
}
