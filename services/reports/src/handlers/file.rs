use axum::{
    Json,
    body::Body,
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::{StatusCode, header},
    response::Response,
};
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use pfetrack_auth_types::identity::IdentityHeaders;
use pfetrack_domain::role::Role;

use crate::domain::policy::require_role;
use crate::error::ReportsServiceError;
use crate::handlers::report::ReportResponse;
use crate::state::AppState;
use crate::usecase::file::{AttachFileUseCase, DownloadFileUseCase};

// ── POST /reports/{id}/upload ────────────────────────────────────────────────

pub async fn upload_report_file(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ReportResponse>, ReportsServiceError> {
    require_role(&identity.roles, Role::Student)?;

    // Take the first part named "file"; anything else in the body is ignored.
    let mut part = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("file") {
            let name = field
                .file_name()
                .ok_or(ReportsServiceError::InvalidInput)?
                .to_owned();
            let data = field.bytes().await.map_err(multipart_error)?;
            part = Some((name, data));
            break;
        }
    }
    let (name, data) = part.ok_or(ReportsServiceError::InvalidInput)?;

    let uc = AttachFileUseCase {
        repo: state.report_repo(),
        files: state.file_store(),
    };
    let report = uc.execute(&identity.into(), id, &data, &name).await?;
    Ok(Json(report.into()))
}

/// A body over the router's size limit surfaces as 413, everything else
/// wrong with the multipart payload as 400.
fn multipart_error(e: MultipartError) -> ReportsServiceError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ReportsServiceError::PayloadTooLarge
    } else {
        ReportsServiceError::InvalidInput
    }
}

// ── GET /reports/{id}/download ───────────────────────────────────────────────

pub async fn download_report_file(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ReportsServiceError> {
    let uc = DownloadFileUseCase {
        repo: state.report_repo(),
        files: state.file_store(),
    };
    let (file, reader) = uc.execute(&identity.into(), id).await?;

    let body = Body::from_stream(ReaderStream::new(reader));
    let disposition = format!(
        "attachment; filename=\"{}\"",
        disposition_filename(&file.name)
    );
    Response::builder()
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(body)
        .map_err(|e| ReportsServiceError::Internal(e.into()))
}

/// Make a filename safe to interpolate into a quoted Content-Disposition
/// value: strip quotes, backslashes, control chars, and path separators.
fn disposition_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '\\' | '/'))
        .collect();
    if cleaned.is_empty() {
        "download".to_owned()
    } else {
        cleaned
    }
}
