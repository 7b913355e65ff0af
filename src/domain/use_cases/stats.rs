use chrono::{DateTime, Duration, Utc};

use crate::{
    constants::EXPIRING_SOON_WINDOW_DAYS,
    entities::certification::Certification,
    entities::stats::DashboardStats,
    errors::AppError,
    repositories::{
        certification::CertificationRepository, course::CourseRepository,
        worker::WorkerRepository,
    },
};

pub struct StatsHandler<W, Co, Ce>
where
    W: WorkerRepository,
    Co: CourseRepository,
    Ce: CertificationRepository,
{
    pub worker_repo: W,
    pub course_repo: Co,
    pub certification_repo: Ce,
}

impl<W, Co, Ce> StatsHandler<W, Co, Ce>
where
    W: WorkerRepository,
    Co: CourseRepository,
    Ce: CertificationRepository,
{
    pub fn new(worker_repo: W, course_repo: Co, certification_repo: Ce) -> Self {
        StatsHandler {
            worker_repo,
            course_repo,
            certification_repo,
        }
    }

    /// Loads all three tables concurrently and counts in memory.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let (workers, courses, certifications) = futures::try_join!(
            self.worker_repo.list_workers(),
            self.course_repo.list_courses(),
            self.certification_repo.list_certifications(),
        )?;

        let cutoff = Utc::now() + Duration::days(EXPIRING_SOON_WINDOW_DAYS);

        Ok(DashboardStats {
            total_workers: workers.len(),
            active_courses: courses.iter().filter(|c| c.is_active).count(),
            total_certifications: certifications.len(),
            expiring_soon: certifications
                .iter()
                .filter(|c| expires_by(c, cutoff))
                .count(),
        })
    }
}

fn expires_by(certification: &Certification, cutoff: DateTime<Utc>) -> bool {
    match certification.expiry_date {
        Some(expiry) => expiry <= cutoff,
        None => false,
    }
}
