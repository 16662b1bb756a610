use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::DbReportRepository;
use crate::infra::fs::LocalFileStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn report_repo(&self) -> DbReportRepository {
        DbReportRepository {
            db: self.db.clone(),
        }
    }

    pub fn file_store(&self) -> LocalFileStore {
        LocalFileStore::new(self.upload_dir.clone())
    }
}
