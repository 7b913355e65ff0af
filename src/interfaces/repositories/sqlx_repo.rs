use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxWorkerRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCourseRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCertificationRepo {
    pub pool: PgPool,
}
