/// Reports service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ReportsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `REPORTS_PORT`.
    pub reports_port: u16,
    /// Root directory for uploaded report files (default "uploads").
    /// Env var: `UPLOAD_DIR`.
    pub upload_dir: String,
}

impl ReportsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            reports_port: std::env::var("REPORTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_owned()),
        }
    }
}
