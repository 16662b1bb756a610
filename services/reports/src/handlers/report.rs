use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pfetrack_auth_types::identity::IdentityHeaders;
use pfetrack_domain::role::Role;

use crate::domain::policy::{require_any_role, require_role};
use crate::domain::types::{Report, ReportFilter, ReportStatus};
use crate::error::ReportsServiceError;
use crate::state::AppState;
use crate::usecase::report::{
    CreateReportInput, CreateReportUseCase, DeleteReportUseCase, GetReportUseCase,
    ListAllReportsUseCase, ListMyReportsUseCase, SubmitReportUseCase, UpdateReportInput,
    UpdateReportUseCase,
};

// ── Response type ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub student_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: &'static str,
    #[serde(serialize_with = "pfetrack_core::serde::to_rfc3339_ms_opt")]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    #[serde(serialize_with = "pfetrack_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "pfetrack_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        // The stored blob location is a server-side detail and stays private.
        let (file_name, file_size) = match report.file {
            Some(file) => (Some(file.name), Some(file.size)),
            None => (None, None),
        };
        ReportResponse {
            id: report.id.to_string(),
            student_id: report.student_id.to_string(),
            title: report.title,
            description: report.description,
            kind: report.kind,
            status: report.status.as_str(),
            submitted_at: report.submitted_at,
            file_name,
            file_size,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ReportListQuery {
    pub keyword: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
}

fn filter_from_query(query: ReportListQuery) -> Result<ReportFilter, ReportsServiceError> {
    let status = query
        .status
        .as_deref()
        .map(|s| ReportStatus::from_str_name(s).ok_or(ReportsServiceError::InvalidInput))
        .transpose()?;
    Ok(ReportFilter {
        owner: None,
        keyword: query.keyword,
        kind: query.kind,
        status,
    })
}

// ── GET /reports ─────────────────────────────────────────────────────────────

pub async fn list_my_reports(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<Vec<ReportResponse>>, ReportsServiceError> {
    require_role(&identity.roles, Role::Student)?;
    let filter = filter_from_query(query)?;
    let uc = ListMyReportsUseCase {
        repo: state.report_repo(),
    };
    let reports = uc.execute(identity.user_id, filter).await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

// ── GET /reports/all ─────────────────────────────────────────────────────────

pub async fn list_all_reports(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<Vec<ReportResponse>>, ReportsServiceError> {
    require_any_role(&identity.roles, &[Role::Admin, Role::Supervisor])?;
    let filter = filter_from_query(query)?;
    let uc = ListAllReportsUseCase {
        repo: state.report_repo(),
    };
    let reports = uc.execute(filter).await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

// ── GET /reports/{id} ────────────────────────────────────────────────────────

pub async fn get_report(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportResponse>, ReportsServiceError> {
    let uc = GetReportUseCase {
        repo: state.report_repo(),
    };
    let report = uc.execute(&identity.into(), id).await?;
    Ok(Json(report.into()))
}

// ── POST /reports ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateReportRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

pub async fn create_report(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateReportRequest>,
) -> Result<Json<ReportResponse>, ReportsServiceError> {
    require_role(&identity.roles, Role::Student)?;
    let uc = CreateReportUseCase {
        repo: state.report_repo(),
    };
    let report = uc
        .execute(
            &identity.into(),
            CreateReportInput {
                title: body.title,
                description: body.description,
                kind: body.kind,
            },
        )
        .await?;
    Ok(Json(report.into()))
}

// ── PUT /reports/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateReportRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

pub async fn update_report(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateReportRequest>,
) -> Result<Json<ReportResponse>, ReportsServiceError> {
    require_role(&identity.roles, Role::Student)?;
    let uc = UpdateReportUseCase {
        repo: state.report_repo(),
    };
    let report = uc
        .execute(
            &identity.into(),
            id,
            UpdateReportInput {
                title: body.title,
                description: body.description,
                kind: body.kind,
            },
        )
        .await?;
    Ok(Json(report.into()))
}

// ── POST /reports/{id}/submit ────────────────────────────────────────────────

pub async fn submit_report(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportResponse>, ReportsServiceError> {
    require_role(&identity.roles, Role::Student)?;
    let uc = SubmitReportUseCase {
        repo: state.report_repo(),
    };
    let report = uc.execute(&identity.into(), id).await?;
    Ok(Json(report.into()))
}

// ── DELETE /reports/{id} ─────────────────────────────────────────────────────

pub async fn delete_report(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ReportsServiceError> {
    require_role(&identity.roles, Role::Student)?;
    let uc = DeleteReportUseCase {
        repo: state.report_repo(),
        files: state.file_store(),
    };
    uc.execute(&identity.into(), id).await?;
    Ok(StatusCode::OK)
}
