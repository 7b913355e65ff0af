use validator::Validate;

use crate::{
    entities::course::{Course, NewCourse},
    errors::AppError,
    repositories::course::CourseRepository,
};

pub struct CourseHandler<R>
where
    R: CourseRepository,
{
    pub course_repo: R,
}

impl<R> CourseHandler<R>
where
    R: CourseRepository,
{
    pub fn new(course_repo: R) -> Self {
        CourseHandler { course_repo }
    }

    /// Lists all courses
    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.course_repo.list_courses().await
    }

    /// Creates a new course after validation
    pub async fn create_course(&self, request: NewCourse) -> Result<Course, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert();
        let course = self.course_repo.create_course(&insert).await?;

        tracing::info!(course_id = course.id, "Course created");
        Ok(course)
    }
}
