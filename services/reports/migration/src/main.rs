#[tokio::main]
async fn main() {
    sea_orm_migration::cli::run_cli(pfetrack_reports_migration::Migrator).await;
}
