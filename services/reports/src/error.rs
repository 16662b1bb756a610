use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Reports service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ReportsServiceError {
    #[error("report not found")]
    ReportNotFound,
    #[error("report has no attached file")]
    FileNotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("report is not in draft status")]
    NotDraft,
    #[error("invalid request")]
    InvalidInput,
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ReportsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReportNotFound => "REPORT_NOT_FOUND",
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::NotDraft => "NOT_DRAFT",
            Self::InvalidInput => "INVALID_INPUT",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ReportsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ReportNotFound | Self::FileNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotDraft | Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — TraceLayer already records method/uri/status for
        // every request, and 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
