use async_trait::async_trait;

use crate::{
    entities::course::{Course, CourseInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxCourseRepo,
};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn create_course(&self, course: &CourseInsert) -> Result<Course, AppError>;
}

impl SqlxCourseRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCourseRepo { pool }
    }
}

const COURSE_COLUMNS: &str = "id, name, description, is_active, created_at";

#[async_trait]
impl CourseRepository for SqlxCourseRepo {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn create_course(&self, course: &CourseInsert) -> Result<Course, AppError> {
        let created = sqlx::query_as::<_, Course>(&format!(
            r#"
            INSERT INTO courses (name, description, is_active, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.is_active)
        .bind(course.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
