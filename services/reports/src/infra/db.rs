use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use pfetrack_reports_schema::reports;

use crate::domain::repository::ReportRepository;
use crate::domain::types::{FileRef, Report, ReportFilter, ReportStatus};
use crate::error::ReportsServiceError;

#[derive(Clone)]
pub struct DbReportRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ReportRepository for DbReportRepository {
    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, ReportsServiceError> {
        let mut query = reports::Entity::find();
        if let Some(owner) = filter.owner {
            query = query.filter(reports::Column::StudentId.eq(owner));
        }
        if let Some(keyword) = &filter.keyword {
            let pattern = format!("%{}%", escape_like(keyword));
            query = query.filter(
                Condition::any()
                    .add(reports::Column::Title.like(pattern.as_str()))
                    .add(reports::Column::Description.like(pattern.as_str())),
            );
        }
        if let Some(kind) = &filter.kind {
            query = query.filter(reports::Column::Kind.eq(kind.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(reports::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(reports::Column::CreatedAt)
            .all(&*self.db)
            .await
            .context("list reports")?;
        models.into_iter().map(report_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>, ReportsServiceError> {
        let model = reports::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .context("find report by id")?;
        model.map(report_from_model).transpose()
    }

    async fn create(&self, report: &Report) -> Result<(), ReportsServiceError> {
        reports::ActiveModel {
            id: Set(report.id),
            student_id: Set(report.student_id),
            title: Set(report.title.clone()),
            description: Set(report.description.clone()),
            kind: Set(report.kind.clone()),
            status: Set(report.status.as_str().to_owned()),
            submitted_at: Set(report.submitted_at),
            file_name: Set(report.file.as_ref().map(|f| f.name.clone())),
            file_path: Set(report.file.as_ref().map(|f| f.path.clone())),
            file_size: Set(report.file.as_ref().map(|f| f.size)),
            created_at: Set(report.created_at),
            updated_at: Set(report.updated_at),
        }
        .insert(&*self.db)
        .await
        .context("create report")?;
        Ok(())
    }

    async fn update_content(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        kind: &str,
        at: DateTime<Utc>,
    ) -> Result<(), ReportsServiceError> {
        reports::ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            kind: Set(kind.to_owned()),
            updated_at: Set(at),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .context("update report content")?;
        Ok(())
    }

    async fn set_file(
        &self,
        id: Uuid,
        file: &FileRef,
        at: DateTime<Utc>,
    ) -> Result<(), ReportsServiceError> {
        reports::ActiveModel {
            id: Set(id),
            file_name: Set(Some(file.name.clone())),
            file_path: Set(Some(file.path.clone())),
            file_size: Set(Some(file.size)),
            updated_at: Set(at),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .context("set report file reference")?;
        Ok(())
    }

    async fn mark_submitted(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), ReportsServiceError> {
        reports::ActiveModel {
            id: Set(id),
            status: Set(ReportStatus::Submitted.as_str().to_owned()),
            submitted_at: Set(Some(at)),
            updated_at: Set(at),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .context("mark report submitted")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ReportsServiceError> {
        let result = reports::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .context("delete report")?;
        Ok(result.rows_affected > 0)
    }
}

fn report_from_model(model: reports::Model) -> Result<Report, ReportsServiceError> {
    let status = ReportStatus::from_str_name(&model.status).ok_or_else(|| {
        ReportsServiceError::Internal(anyhow::anyhow!(
            "unknown report status {:?} on report {}",
            model.status,
            model.id
        ))
    })?;
    let file = match (model.file_name, model.file_path, model.file_size) {
        (Some(name), Some(path), Some(size)) => Some(FileRef { name, path, size }),
        (None, None, None) => None,
        _ => {
            return Err(ReportsServiceError::Internal(anyhow::anyhow!(
                "partial file reference on report {}",
                model.id
            )));
        }
    };
    Ok(Report {
        id: model.id,
        student_id: model.student_id,
        title: model.title,
        description: model.description,
        kind: model.kind,
        status,
        submitted_at: model.submitted_at,
        file,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

/// Escape LIKE metacharacters so user keywords match literally.
fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
