use anyhow::Result;
use ideation_composer::{
    build_router, AppState, ChatEngine, ReportBuilder, ServiceConfig, Workspace,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Ideation Composer Service v0.1.0");

    let config = ServiceConfig::from_env();
    info!(
        "Engine config: creativity {:.2}, innovation threshold {:.2}, seed {:?}",
        config.engine.creativity_level, config.engine.innovation_threshold, config.engine.seed
    );
    info!("Reports directory: {}", config.report_dir.display());

    let state = AppState::new(
        Workspace::new(config.engine.clone()),
        ChatEngine::new()?,
        ReportBuilder::from_env(),
        config.report_dir.clone(),
    );

    let app = build_router(state);

    // Start HTTP server
    info!("Starting HTTP server on http://{}", config.addr);
    info!("Chat endpoint: http://{}/v1/respond", config.addr);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
