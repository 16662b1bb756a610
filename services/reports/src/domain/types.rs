use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Report lifecycle status.
///
/// Created as `Draft`; the only transition is `Draft` → `Submitted`. A
/// submitted report is immutable and undeletable through this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Draft,
    Submitted,
}

impl ReportStatus {
    /// Stored / wire form (`"Draft"`, `"Submitted"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "Draft" => Some(Self::Draft),
            "Submitted" => Some(Self::Submitted),
            _ => None,
        }
    }

    pub fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }
}

/// Reference to an attached file. The three fields are recorded together at
/// upload; a report either has a complete reference or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Original filename, used as the suggested download name.
    pub name: String,
    /// Stored location inside the file store.
    pub path: String,
    /// Size in bytes at upload time.
    pub size: i64,
}

/// A student report.
#[derive(Debug, Clone)]
pub struct Report {
    pub id: Uuid,
    /// Owning student, set at creation and never reassigned.
    pub student_id: Uuid,
    pub title: String,
    pub description: String,
    /// Free-form classification (API field `type`).
    pub kind: String,
    pub status: ReportStatus,
    /// Set exactly once, at submission.
    pub submitted_at: Option<DateTime<Utc>>,
    pub file: Option<FileRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional predicates composed by the repository when listing reports.
///
/// `keyword` is a substring match on title or description; `kind` and
/// `status` match exactly; `owner` scopes to a single student.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub owner: Option<Uuid>,
    pub keyword: Option<String>,
    pub kind: Option<String>,
    pub status: Option<ReportStatus>,
}

impl ReportFilter {
    pub fn with_owner(mut self, owner: Uuid) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_status(mut self, status: ReportStatus) -> Self {
        self.status = Some(status);
        self
    }
}
