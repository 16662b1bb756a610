#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use tokio::io::AsyncRead;
use uuid::Uuid;

use crate::domain::types::{FileRef, Report, ReportFilter};
use crate::error::ReportsServiceError;

/// Repository for report records.
pub trait ReportRepository: Send + Sync {
    /// List reports matching the composed filter, newest first.
    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, ReportsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>, ReportsServiceError>;

    async fn create(&self, report: &Report) -> Result<(), ReportsServiceError>;

    /// Overwrite the three editable fields, stamping `at` as `updated_at`.
    async fn update_content(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        kind: &str,
        at: DateTime<Utc>,
    ) -> Result<(), ReportsServiceError>;

    /// Record an attached file reference, replacing any previous one and
    /// stamping `at` as `updated_at`.
    async fn set_file(
        &self,
        id: Uuid,
        file: &FileRef,
        at: DateTime<Utc>,
    ) -> Result<(), ReportsServiceError>;

    /// Draft → Submitted, stamping the submission time.
    async fn mark_submitted(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), ReportsServiceError>;

    /// Delete a report. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ReportsServiceError>;
}

/// Blob storage for report attachments.
pub trait FileStore: Send + Sync {
    /// Write `data` under a freshly generated storage key, preserving the
    /// extension of `original_name` when present. Returns the stored location.
    async fn put(&self, data: &[u8], original_name: &str) -> Result<String, ReportsServiceError>;

    /// Open a stored blob for reading. A missing or unreadable blob is an
    /// internal error: the record claims a file that cannot be served.
    async fn open(
        &self,
        location: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, ReportsServiceError>;

    /// Best-effort removal; a missing blob is not an error.
    async fn delete(&self, location: &str) -> Result<(), ReportsServiceError>;
}
