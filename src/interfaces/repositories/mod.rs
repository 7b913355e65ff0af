pub mod certification;
pub mod course;
pub mod sqlx_repo;
pub mod worker;
