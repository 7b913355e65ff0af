use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dates::parse_optional_date_time;
use crate::domain::entities::certification::Certification;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    // Carried through from the intake form; not interpreted anywhere.
    pub date_of_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewWorker {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    pub date_of_birth: Option<String>,
    pub date_of_expiry: Option<String>,
}

#[derive(Debug)]
pub struct WorkerInsert {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub date_of_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Response shape for worker creation: the new row plus the certification
/// rows recorded with it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerWithCertifications {
    pub worker: Worker,
    pub certifications: Vec<Certification>,
}

impl NewWorker {
    pub fn prepare_for_insert(&self) -> Result<WorkerInsert, AppError> {
        Ok(WorkerInsert {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            date_of_birth: parse_optional_date_time("dateOfBirth", self.date_of_birth.as_deref())?,
            date_of_expiry: parse_optional_date_time("dateOfExpiry", self.date_of_expiry.as_deref())?,
            created_at: Utc::now(),
        })
    }
}
