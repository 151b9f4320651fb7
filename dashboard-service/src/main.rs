use dashboard_core::config::Settings;
use dashboard_core::observability::logging::init_tracing;
use dashboard_service::AppState;
use dashboard_service::services::database::Database;
use dashboard_service::startup::build_router;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("dashboard-service", "info");

    dashboard_service::services::metrics::init_metrics();

    let db = Database::new(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
    )
    .await
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    db.run_migrations()
        .await
        .map_err(|e| anyhow::anyhow!("Migration error: {}", e))?;

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    let app = build_router(AppState::new(settings, db));

    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting dashboard-service on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
