use user_service::config::UserConfig;
use user_service::observability::init_tracing;
use user_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = UserConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // A failed connection aborts startup; the process exits with status 1.
    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start user-service: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
