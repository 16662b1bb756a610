use chrono::Utc;
use tokio::io::AsyncRead;
use uuid::Uuid;

use crate::domain::policy::{self, Principal, Relationship};
use crate::domain::repository::{FileStore, ReportRepository};
use crate::domain::types::{FileRef, Report};
use crate::error::ReportsServiceError;

// ── AttachFile ───────────────────────────────────────────────────────────────

pub struct AttachFileUseCase<R: ReportRepository, F: FileStore> {
    pub repo: R,
    pub files: F,
}

impl<R: ReportRepository, F: FileStore> AttachFileUseCase<R, F> {
    /// Store the blob under a generated key and overwrite the report's file
    /// reference. A previously attached blob becomes orphaned on disk; it is
    /// not garbage-collected.
    ///
    /// Ownership is the only gate — there is no draft check, so re-upload
    /// after submission is allowed.
    pub async fn execute(
        &self,
        principal: &Principal,
        id: Uuid,
        data: &[u8],
        original_name: &str,
    ) -> Result<Report, ReportsServiceError> {
        let mut report = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ReportsServiceError::ReportNotFound)?;
        policy::authorize(principal, &report, Relationship::Owner)?;

        let path = self.files.put(data, original_name).await?;
        let file = FileRef {
            name: original_name.to_owned(),
            path,
            size: data.len() as i64,
        };
        let now = Utc::now();
        self.repo.set_file(id, &file, now).await?;
        report.file = Some(file);
        report.updated_at = now;
        Ok(report)
    }
}

// ── DownloadFile ─────────────────────────────────────────────────────────────

pub struct DownloadFileUseCase<R: ReportRepository, F: FileStore> {
    pub repo: R,
    pub files: F,
}

impl<R: ReportRepository, F: FileStore> DownloadFileUseCase<R, F> {
    /// Resolve the report's file reference and open the blob for streaming.
    ///
    /// A report without a file reference is NotFound; a recorded reference
    /// whose blob cannot be opened surfaces as an internal error.
    pub async fn execute(
        &self,
        principal: &Principal,
        id: Uuid,
    ) -> Result<(FileRef, Box<dyn AsyncRead + Send + Unpin>), ReportsServiceError> {
        let report = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ReportsServiceError::ReportNotFound)?;
        policy::authorize(principal, &report, Relationship::OwnerIfStudent)?;

        let file = report.file.ok_or(ReportsServiceError::FileNotFound)?;
        let reader = self.files.open(&file.path).await?;
        Ok((file, reader))
    }
}
