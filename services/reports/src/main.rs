use sea_orm::Database;
use tracing::info;

use pfetrack_reports::config::ReportsConfig;
use pfetrack_reports::router::build_router;
use pfetrack_reports::state::AppState;

#[tokio::main]
async fn main() {
    pfetrack_core::tracing::init_tracing("reports");

    let config = ReportsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db: std::sync::Arc::new(db),
        upload_dir: config.upload_dir.into(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.reports_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("reports service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
