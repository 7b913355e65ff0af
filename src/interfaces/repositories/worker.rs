use async_trait::async_trait;

use crate::{
    entities::worker::{Worker, WorkerInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxWorkerRepo,
};

#[async_trait]
pub trait WorkerRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn list_workers(&self) -> Result<Vec<Worker>, AppError>;
    async fn create_worker(&self, worker: &WorkerInsert) -> Result<Worker, AppError>;
}

impl SqlxWorkerRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxWorkerRepo { pool }
    }
}

const WORKER_COLUMNS: &str = "id, name, email, phone, date_of_birth, date_of_expiry, created_at";

#[async_trait]
impl WorkerRepository for SqlxWorkerRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn list_workers(&self) -> Result<Vec<Worker>, AppError> {
        let workers = sqlx::query_as::<_, Worker>(&format!(
            "SELECT {WORKER_COLUMNS} FROM workers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(workers)
    }

    async fn create_worker(&self, worker: &WorkerInsert) -> Result<Worker, AppError> {
        let created = sqlx::query_as::<_, Worker>(&format!(
            r#"
            INSERT INTO workers (name, email, phone, date_of_birth, date_of_expiry, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {WORKER_COLUMNS}
            "#
        ))
        .bind(&worker.name)
        .bind(&worker.email)
        .bind(&worker.phone)
        .bind(worker.date_of_birth)
        .bind(worker.date_of_expiry)
        .bind(worker.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
