mod mocks;

use certtrack_backend::entities::stats::DashboardStats;
use certtrack_backend::use_cases::stats::StatsHandler;
use mocks::{MockCertificationRepo, MockCourseRepo, MockWorkerRepo};
use test_data::*;

fn stats_handler(
    workers: Vec<certtrack_backend::entities::worker::Worker>,
    courses: Vec<certtrack_backend::entities::course::Course>,
    certifications: Vec<certtrack_backend::entities::certification::Certification>,
) -> StatsHandler<MockWorkerRepo, MockCourseRepo, MockCertificationRepo> {
    let mut worker_repo = MockWorkerRepo::new();
    let mut course_repo = MockCourseRepo::new();
    let mut certification_repo = MockCertificationRepo::new();

    worker_repo
        .expect_list_workers()
        .times(1)
        .return_once(move || Ok(workers));
    course_repo
        .expect_list_courses()
        .times(1)
        .return_once(move || Ok(courses));
    certification_repo
        .expect_list_certifications()
        .times(1)
        .return_once(move || Ok(certifications));

    StatsHandler::new(worker_repo, course_repo, certification_repo)
}

#[actix_rt::test]
async fn empty_store_yields_all_zero_counters() {
    let handler = stats_handler(vec![], vec![], vec![]);

    let stats = handler.dashboard_stats().await.unwrap();

    assert_eq!(
        stats,
        DashboardStats {
            total_workers: 0,
            active_courses: 0,
            total_certifications: 0,
            expiring_soon: 0,
        }
    );
}

#[actix_rt::test]
async fn counts_only_active_courses() {
    let handler = stats_handler(
        vec![],
        vec![
            course_row(1, "Safety", true),
            course_row(2, "Archived", false),
            course_row(3, "Heights", true),
        ],
        vec![],
    );

    let stats = handler.dashboard_stats().await.unwrap();

    assert_eq!(stats.active_courses, 2);
}

#[actix_rt::test]
async fn expiring_soon_uses_thirty_day_window_and_skips_null_expiry() {
    let handler = stats_handler(
        vec![],
        vec![],
        vec![
            certification_expiring_in(1, 10),
            certification_expiring_in(2, 29),
            certification_expiring_in(3, 60),
            certification_without_expiry(4),
        ],
    );

    let stats = handler.dashboard_stats().await.unwrap();

    assert_eq!(stats.total_certifications, 4);
    assert_eq!(stats.expiring_soon, 2);
}

#[actix_rt::test]
async fn already_expired_certifications_count_as_expiring_soon() {
    let handler = stats_handler(vec![], vec![], vec![certification_expiring_in(1, -15)]);

    let stats = handler.dashboard_stats().await.unwrap();

    assert_eq!(stats.expiring_soon, 1);
}
