use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Returns true, used for serde default.
fn default_true() -> bool {
    true
}

#[derive(Debug)]
pub struct CourseInsert {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewCourse {
    pub fn prepare_for_insert(&self) -> CourseInsert {
        CourseInsert {
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}
