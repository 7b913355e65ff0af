mod mocks;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use certtrack_backend::errors::AppError;
use certtrack_backend::use_cases::workers::{NewWorkerRequest, WorkerHandler};
use mocks::{MockCertificationRepo, MockWorkerRepo};
use test_data::*;

#[actix_rt::test]
async fn create_worker_returns_worker_with_certifications() {
    let mut worker_repo = MockWorkerRepo::new();
    let mut certification_repo = MockCertificationRepo::new();

    worker_repo
        .expect_create_worker()
        .times(1)
        .returning(|insert| Ok(worker_from_insert(7, insert)));

    certification_repo
        .expect_create_certification()
        .times(1)
        .withf(|insert| insert.worker_id == 7 && insert.status == "active")
        .returning(|insert| Ok(certification_from_insert(1, insert)));

    let handler = WorkerHandler::new(worker_repo, certification_repo);

    let request = NewWorkerRequest {
        worker: new_worker("Jane Doe"),
        certifications: vec![nested_certification("Safety", "C-100")],
    };

    let created = handler.create_worker(request).await.unwrap();

    assert_eq!(created.worker.id, 7);
    assert_eq!(created.worker.name, "Jane Doe");
    assert_eq!(created.certifications.len(), 1);
    assert_eq!(created.certifications[0].worker_id, 7);
    assert_eq!(created.certifications[0].status, "active");
}

#[actix_rt::test]
async fn create_worker_without_certifications_inserts_nothing_extra() {
    let mut worker_repo = MockWorkerRepo::new();
    let certification_repo = MockCertificationRepo::new();

    worker_repo
        .expect_create_worker()
        .times(1)
        .returning(|insert| Ok(worker_from_insert(3, insert)));

    let handler = WorkerHandler::new(worker_repo, certification_repo);

    let request = NewWorkerRequest {
        worker: new_worker("Solo Worker"),
        certifications: vec![],
    };

    let created = handler.create_worker(request).await.unwrap();

    assert_eq!(created.worker.id, 3);
    assert!(created.certifications.is_empty());
}

#[actix_rt::test]
async fn create_worker_rejects_empty_name() {
    let handler = WorkerHandler::new(MockWorkerRepo::new(), MockCertificationRepo::new());

    let request = NewWorkerRequest {
        worker: new_worker(""),
        certifications: vec![],
    };

    let result = handler.create_worker(request).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[actix_rt::test]
async fn create_worker_normalizes_bare_dates_to_midnight_utc() {
    let mut worker_repo = MockWorkerRepo::new();
    let expected = Utc.with_ymd_and_hms(1990, 5, 1, 0, 0, 0).unwrap();

    worker_repo
        .expect_create_worker()
        .times(1)
        .withf(move |insert| insert.date_of_birth == Some(expected) && insert.date_of_expiry.is_none())
        .returning(|insert| Ok(worker_from_insert(1, insert)));

    let handler = WorkerHandler::new(worker_repo, MockCertificationRepo::new());

    let mut worker = new_worker("Jane Doe");
    worker.date_of_birth = Some("1990-05-01".to_string());

    let request = NewWorkerRequest {
        worker,
        certifications: vec![],
    };

    handler.create_worker(request).await.unwrap();
}

#[actix_rt::test]
async fn create_worker_rejects_malformed_date() {
    let handler = WorkerHandler::new(MockWorkerRepo::new(), MockCertificationRepo::new());

    let mut worker = new_worker("Jane Doe");
    worker.date_of_expiry = Some("next summer".to_string());

    let request = NewWorkerRequest {
        worker,
        certifications: vec![],
    };

    let result = handler.create_worker(request).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[actix_rt::test]
async fn create_worker_stops_at_first_failed_certification() {
    let mut worker_repo = MockWorkerRepo::new();
    let mut certification_repo = MockCertificationRepo::new();

    worker_repo
        .expect_create_worker()
        .times(1)
        .returning(|insert| Ok(worker_from_insert(5, insert)));

    // Second insert fails; the third certification must never be attempted.
    let calls = Arc::new(AtomicUsize::new(0));
    certification_repo
        .expect_create_certification()
        .times(2)
        .returning(move |insert| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(certification_from_insert(1, insert))
            } else {
                Err(AppError::Conflict("Certificate number already exists".into()))
            }
        });

    let handler = WorkerHandler::new(worker_repo, certification_repo);

    let request = NewWorkerRequest {
        worker: new_worker("Jane Doe"),
        certifications: vec![
            nested_certification("Safety", "C-100"),
            nested_certification("Forklift", "C-100"),
            nested_certification("First Aid", "C-101"),
        ],
    };

    let result = handler.create_worker(request).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[actix_rt::test]
async fn list_workers_passes_rows_through() {
    let mut worker_repo = MockWorkerRepo::new();

    worker_repo.expect_list_workers().times(1).returning(|| {
        let insert = new_worker("Jane Doe").prepare_for_insert().unwrap();
        Ok(vec![worker_from_insert(1, &insert)])
    });

    let handler = WorkerHandler::new(worker_repo, MockCertificationRepo::new());

    let workers = handler.list_workers().await.unwrap();

    assert_eq!(workers.len(), 1);
    assert_eq!(workers[0].name, "Jane Doe");
}
