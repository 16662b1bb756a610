use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use pfetrack_core::health::health;
use pfetrack_core::middleware::request_id_layer;

use crate::handlers::file::{download_report_file, upload_report_file};
use crate::handlers::report::{
    create_report, delete_report, get_report, list_all_reports, list_my_reports, submit_report,
    update_report,
};
use crate::state::AppState;

/// Upper bound for request bodies, sized for multipart uploads.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        // Reports
        .route("/reports", get(list_my_reports).post(create_report))
        .route("/reports/all", get(list_all_reports))
        .route(
            "/reports/{id}",
            get(get_report).put(update_report).delete(delete_report),
        )
        .route("/reports/{id}/upload", post(upload_report_file))
        .route("/reports/{id}/download", get(download_report_file))
        .route("/reports/{id}/submit", post(submit_report))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
