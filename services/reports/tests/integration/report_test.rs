use uuid::Uuid;

use pfetrack_reports::domain::types::{ReportFilter, ReportStatus};
use pfetrack_reports::error::ReportsServiceError;
use pfetrack_reports::usecase::report::{
    CreateReportInput, CreateReportUseCase, DeleteReportUseCase, GetReportUseCase,
    ListAllReportsUseCase, ListMyReportsUseCase, SubmitReportUseCase, UpdateReportInput,
    UpdateReportUseCase,
};

use crate::helpers::{
    MockFileStore, MockReportRepo, admin, draft_report, student, submitted_report, supervisor,
};

// ── Create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_report_as_draft_owned_by_caller() {
    let caller = student(Uuid::now_v7());
    let repo = MockReportRepo::empty();
    let handle = repo.handle();

    let uc = CreateReportUseCase { repo };
    let report = uc
        .execute(
            &caller,
            CreateReportInput {
                title: "T1".to_owned(),
                description: "first draft".to_owned(),
                kind: "progress".to_owned(),
            },
        )
        .await
        .unwrap();

    assert_eq!(report.student_id, caller.user_id);
    assert_eq!(report.status, ReportStatus::Draft);
    assert!(report.submitted_at.is_none());
    assert!(report.file.is_none());

    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, report.id);
    assert_eq!(stored[0].status, ReportStatus::Draft);
}

#[tokio::test]
async fn should_reject_create_with_blank_title() {
    let caller = student(Uuid::now_v7());
    let uc = CreateReportUseCase {
        repo: MockReportRepo::empty(),
    };
    let result = uc
        .execute(
            &caller,
            CreateReportInput {
                title: "   ".to_owned(),
                description: String::new(),
                kind: String::new(),
            },
        )
        .await;
    assert!(matches!(result, Err(ReportsServiceError::InvalidInput)));
}

// ── Get ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_not_found_before_any_authorization_check() {
    let caller = student(Uuid::now_v7());
    let uc = GetReportUseCase {
        repo: MockReportRepo::empty(),
    };
    let result = uc.execute(&caller, Uuid::now_v7()).await;
    assert!(matches!(result, Err(ReportsServiceError::ReportNotFound)));
}

#[tokio::test]
async fn should_forbid_student_viewing_someone_elses_report() {
    let report = draft_report(Uuid::now_v7());
    let other = student(Uuid::now_v7());
    let uc = GetReportUseCase {
        repo: MockReportRepo::new(vec![report.clone()]),
    };
    let result = uc.execute(&other, report.id).await;
    assert!(matches!(result, Err(ReportsServiceError::Forbidden)));
}

#[tokio::test]
async fn should_allow_owner_to_view_own_report() {
    let owner = Uuid::now_v7();
    let report = draft_report(owner);
    let uc = GetReportUseCase {
        repo: MockReportRepo::new(vec![report.clone()]),
    };
    let found = uc.execute(&student(owner), report.id).await.unwrap();
    assert_eq!(found.id, report.id);
}

#[tokio::test]
async fn should_allow_supervisor_and_admin_to_view_any_report() {
    let report = submitted_report(Uuid::now_v7());
    for caller in [supervisor(), admin()] {
        let uc = GetReportUseCase {
            repo: MockReportRepo::new(vec![report.clone()]),
        };
        assert!(uc.execute(&caller, report.id).await.is_ok());
    }
}

// ── Update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_editable_fields_while_draft() {
    let owner = Uuid::now_v7();
    let report = draft_report(owner);
    let repo = MockReportRepo::new(vec![report.clone()]);
    let handle = repo.handle();

    let uc = UpdateReportUseCase { repo };
    let updated = uc
        .execute(
            &student(owner),
            report.id,
            UpdateReportInput {
                title: "Renamed".to_owned(),
                description: "New text".to_owned(),
                kind: "final".to_owned(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.status, ReportStatus::Draft);

    let stored = handle.lock().unwrap();
    assert_eq!(stored[0].title, "Renamed");
    assert_eq!(stored[0].description, "New text");
    assert_eq!(stored[0].kind, "final");
    // The response carries the same timestamp the row was stamped with.
    assert_eq!(stored[0].updated_at, updated.updated_at);
}

#[tokio::test]
async fn should_forbid_update_by_non_owner() {
    let report = draft_report(Uuid::now_v7());
    let uc = UpdateReportUseCase {
        repo: MockReportRepo::new(vec![report.clone()]),
    };
    let result = uc
        .execute(
            &student(Uuid::now_v7()),
            report.id,
            UpdateReportInput {
                title: "X".to_owned(),
                description: String::new(),
                kind: String::new(),
            },
        )
        .await;
    assert!(matches!(result, Err(ReportsServiceError::Forbidden)));
}

#[tokio::test]
async fn should_reject_update_after_submission() {
    let owner = Uuid::now_v7();
    let report = submitted_report(owner);
    let uc = UpdateReportUseCase {
        repo: MockReportRepo::new(vec![report.clone()]),
    };
    let result = uc
        .execute(
            &student(owner),
            report.id,
            UpdateReportInput {
                title: "X".to_owned(),
                description: String::new(),
                kind: String::new(),
            },
        )
        .await;
    assert!(matches!(result, Err(ReportsServiceError::NotDraft)));
}

// ── Submit ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_submit_draft_and_stamp_submission_time() {
    let owner = Uuid::now_v7();
    let report = draft_report(owner);
    let repo = MockReportRepo::new(vec![report.clone()]);
    let handle = repo.handle();

    let uc = SubmitReportUseCase { repo };
    let submitted = uc.execute(&student(owner), report.id).await.unwrap();

    assert_eq!(submitted.status, ReportStatus::Submitted);
    assert!(submitted.submitted_at.is_some());

    let stored = handle.lock().unwrap();
    assert_eq!(stored[0].status, ReportStatus::Submitted);
    assert_eq!(stored[0].submitted_at, submitted.submitted_at);
}

#[tokio::test]
async fn should_reject_submitting_twice() {
    let owner = Uuid::now_v7();
    let report = submitted_report(owner);
    let uc = SubmitReportUseCase {
        repo: MockReportRepo::new(vec![report.clone()]),
    };
    let result = uc.execute(&student(owner), report.id).await;
    assert!(matches!(result, Err(ReportsServiceError::NotDraft)));
}

#[tokio::test]
async fn should_forbid_submit_by_non_owner() {
    let report = draft_report(Uuid::now_v7());
    let uc = SubmitReportUseCase {
        repo: MockReportRepo::new(vec![report.clone()]),
    };
    let result = uc.execute(&student(Uuid::now_v7()), report.id).await;
    assert!(matches!(result, Err(ReportsServiceError::Forbidden)));
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_draft_report() {
    let owner = Uuid::now_v7();
    let report = draft_report(owner);
    let repo = MockReportRepo::new(vec![report.clone()]);
    let handle = repo.handle();

    let uc = DeleteReportUseCase {
        repo,
        files: MockFileStore::new(),
    };
    uc.execute(&student(owner), report.id).await.unwrap();
    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_delete_after_submission() {
    let owner = Uuid::now_v7();
    let report = submitted_report(owner);
    let uc = DeleteReportUseCase {
        repo: MockReportRepo::new(vec![report.clone()]),
        files: MockFileStore::new(),
    };
    let result = uc.execute(&student(owner), report.id).await;
    assert!(matches!(result, Err(ReportsServiceError::NotDraft)));
}

#[tokio::test]
async fn should_delete_record_even_when_blob_delete_fails() {
    let owner = Uuid::now_v7();
    let mut report = draft_report(owner);
    report.file = Some(pfetrack_reports::domain::types::FileRef {
        name: "x.pdf".to_owned(),
        path: "mock/x".to_owned(),
        size: 3,
    });
    let repo = MockReportRepo::new(vec![report.clone()]);
    let handle = repo.handle();

    let uc = DeleteReportUseCase {
        repo,
        files: MockFileStore::failing_delete(),
    };
    uc.execute(&student(owner), report.id)
        .await
        .expect("record deletion must succeed despite blob failure");
    assert!(handle.lock().unwrap().is_empty());
}

// ── Listing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_scope_my_reports_to_the_caller() {
    let mine = Uuid::now_v7();
    let theirs = Uuid::now_v7();
    let repo = MockReportRepo::new(vec![
        draft_report(mine),
        draft_report(theirs),
        submitted_report(mine),
    ]);

    let uc = ListMyReportsUseCase { repo };
    // Even a filter claiming another owner is overridden by the use case.
    let filter = ReportFilter::default().with_owner(theirs);
    let reports = uc.execute(mine, filter).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.student_id == mine));
}

#[tokio::test]
async fn should_apply_keyword_kind_and_status_filters() {
    let owner = Uuid::now_v7();
    let mut a = draft_report(owner);
    a.title = "Literature survey".to_owned();
    a.kind = "survey".to_owned();
    let mut b = submitted_report(owner);
    b.description = "final survey results".to_owned();
    let c = draft_report(owner);

    let repo = MockReportRepo::new(vec![a.clone(), b.clone(), c]);

    let uc = ListMyReportsUseCase { repo: repo.clone() };
    let by_keyword = uc
        .execute(owner, ReportFilter::default().with_keyword("survey"))
        .await
        .unwrap();
    assert_eq!(by_keyword.len(), 2);

    let by_kind = uc
        .execute(owner, ReportFilter::default().with_kind("survey"))
        .await
        .unwrap();
    assert_eq!(by_kind.len(), 1);
    assert_eq!(by_kind[0].id, a.id);

    let by_status = uc
        .execute(
            owner,
            ReportFilter::default().with_status(ReportStatus::Submitted),
        )
        .await
        .unwrap();
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].id, b.id);
}

#[tokio::test]
async fn should_list_all_reports_across_owners() {
    let repo = MockReportRepo::new(vec![
        draft_report(Uuid::now_v7()),
        submitted_report(Uuid::now_v7()),
    ]);
    let uc = ListAllReportsUseCase { repo };
    let reports = uc.execute(ReportFilter::default()).await.unwrap();
    assert_eq!(reports.len(), 2);
}

// ── Full lifecycle ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_walk_the_draft_to_submitted_lifecycle() {
    let owner = Uuid::now_v7();
    let caller = student(owner);
    let intruder = student(Uuid::now_v7());
    let repo = MockReportRepo::empty();

    // Student A creates a report: Draft, owned by A.
    let created = CreateReportUseCase { repo: repo.clone() }
        .execute(
            &caller,
            CreateReportInput {
                title: "T1".to_owned(),
                description: String::new(),
                kind: String::new(),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.status, ReportStatus::Draft);
    assert_eq!(created.student_id, owner);

    // Student B cannot view it.
    let get_by_b = GetReportUseCase { repo: repo.clone() }
        .execute(&intruder, created.id)
        .await;
    assert!(matches!(get_by_b, Err(ReportsServiceError::Forbidden)));

    // A edits the title while Draft.
    let updated = UpdateReportUseCase { repo: repo.clone() }
        .execute(
            &caller,
            created.id,
            UpdateReportInput {
                title: "T1 revised".to_owned(),
                description: String::new(),
                kind: String::new(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "T1 revised");

    // A submits: Submitted with a timestamp.
    let submitted = SubmitReportUseCase { repo: repo.clone() }
        .execute(&caller, created.id)
        .await
        .unwrap();
    assert_eq!(submitted.status, ReportStatus::Submitted);
    assert!(submitted.submitted_at.is_some());

    // Further edits and deletion are rejected.
    let late_update = UpdateReportUseCase { repo: repo.clone() }
        .execute(
            &caller,
            created.id,
            UpdateReportInput {
                title: "too late".to_owned(),
                description: String::new(),
                kind: String::new(),
            },
        )
        .await;
    assert!(matches!(late_update, Err(ReportsServiceError::NotDraft)));

    let late_delete = DeleteReportUseCase {
        repo: repo.clone(),
        files: MockFileStore::new(),
    }
    .execute(&caller, created.id)
    .await;
    assert!(matches!(late_delete, Err(ReportsServiceError::NotDraft)));
}
