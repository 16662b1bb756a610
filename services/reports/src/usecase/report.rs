use chrono::Utc;
use uuid::Uuid;

use crate::domain::policy::{self, Principal, Relationship};
use crate::domain::repository::{FileStore, ReportRepository};
use crate::domain::types::{Report, ReportFilter, ReportStatus};
use crate::error::ReportsServiceError;

// ── ListMyReports ────────────────────────────────────────────────────────────

pub struct ListMyReportsUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> ListMyReportsUseCase<R> {
    pub async fn execute(
        &self,
        owner: Uuid,
        mut filter: ReportFilter,
    ) -> Result<Vec<Report>, ReportsServiceError> {
        // Ownership scoping is forced here, never caller-controlled.
        filter.owner = Some(owner);
        self.repo.list(&filter).await
    }
}

// ── ListAllReports ───────────────────────────────────────────────────────────

pub struct ListAllReportsUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> ListAllReportsUseCase<R> {
    pub async fn execute(
        &self,
        mut filter: ReportFilter,
    ) -> Result<Vec<Report>, ReportsServiceError> {
        filter.owner = None;
        self.repo.list(&filter).await
    }
}

// ── GetReport ────────────────────────────────────────────────────────────────

pub struct GetReportUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> GetReportUseCase<R> {
    pub async fn execute(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Report, ReportsServiceError> {
        let report = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ReportsServiceError::ReportNotFound)?;
        policy::authorize(principal, &report, Relationship::OwnerIfStudent)?;
        Ok(report)
    }
}

// ── CreateReport ─────────────────────────────────────────────────────────────

pub struct CreateReportInput {
    pub title: String,
    pub description: String,
    pub kind: String,
}

pub struct CreateReportUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> CreateReportUseCase<R> {
    /// Persist a new draft owned by the caller. Owner and status are always
    /// assigned here; the request cannot supply them.
    pub async fn execute(
        &self,
        principal: &Principal,
        input: CreateReportInput,
    ) -> Result<Report, ReportsServiceError> {
        if input.title.trim().is_empty() {
            return Err(ReportsServiceError::InvalidInput);
        }
        let now = Utc::now();
        let report = Report {
            id: Uuid::now_v7(),
            student_id: principal.user_id,
            title: input.title,
            description: input.description,
            kind: input.kind,
            status: ReportStatus::Draft,
            submitted_at: None,
            file: None,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&report).await?;
        Ok(report)
    }
}

// ── UpdateReport ─────────────────────────────────────────────────────────────

pub struct UpdateReportInput {
    pub title: String,
    pub description: String,
    pub kind: String,
}

pub struct UpdateReportUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> UpdateReportUseCase<R> {
    pub async fn execute(
        &self,
        principal: &Principal,
        id: Uuid,
        input: UpdateReportInput,
    ) -> Result<Report, ReportsServiceError> {
        let mut report = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ReportsServiceError::ReportNotFound)?;
        policy::authorize(principal, &report, Relationship::Owner)?;
        policy::require_draft(&report)?;
        if input.title.trim().is_empty() {
            return Err(ReportsServiceError::InvalidInput);
        }
        // Single timestamp shared by row and response.
        let now = Utc::now();
        self.repo
            .update_content(id, &input.title, &input.description, &input.kind, now)
            .await?;
        report.title = input.title;
        report.description = input.description;
        report.kind = input.kind;
        report.updated_at = now;
        Ok(report)
    }
}

// ── SubmitReport ─────────────────────────────────────────────────────────────

pub struct SubmitReportUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> SubmitReportUseCase<R> {
    pub async fn execute(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Report, ReportsServiceError> {
        let mut report = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ReportsServiceError::ReportNotFound)?;
        policy::authorize(principal, &report, Relationship::Owner)?;
        policy::require_draft(&report)?;
        let now = Utc::now();
        self.repo.mark_submitted(id, now).await?;
        report.status = ReportStatus::Submitted;
        report.submitted_at = Some(now);
        report.updated_at = now;
        Ok(report)
    }
}

// ── DeleteReport ─────────────────────────────────────────────────────────────

pub struct DeleteReportUseCase<R: ReportRepository, F: FileStore> {
    pub repo: R,
    pub files: F,
}

impl<R: ReportRepository, F: FileStore> DeleteReportUseCase<R, F> {
    pub async fn execute(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<(), ReportsServiceError> {
        let report = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ReportsServiceError::ReportNotFound)?;
        policy::authorize(principal, &report, Relationship::Owner)?;
        policy::require_draft(&report)?;

        // Blob removal is best-effort: once the delete is authorized and
        // state-valid, the record always goes.
        if let Some(file) = &report.file {
            if let Err(e) = self.files.delete(&file.path).await {
                tracing::warn!(
                    error = %e,
                    path = %file.path,
                    report_id = %id,
                    "failed to delete report file, deleting record anyway"
                );
            }
        }

        self.repo.delete(id).await?;
        Ok(())
    }
}
