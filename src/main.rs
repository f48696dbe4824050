mod model;
mod server;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::status_poll,
    service::probe::{McStatusProber, StatusProber},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_default_content(&db).await?;
    startup::ensure_upload_dir(&config.upload_dir).await?;

    let prober: Arc<dyn StatusProber> = Arc::new(McStatusProber::from_config(&config)?);

    tracing::info!("Starting server");

    // Keep peak data fresh even with no visitors
    let mut scheduler = status_poll::start_scheduler(db.clone(), prober.clone()).await?;

    let state = AppState::new(db, prober, config.upload_dir.clone(), config.app_url.clone());

    let app = router::router()
        .with_state(state)
        .merge(router::swagger_ui())
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C, letting axum drain in-flight
/// requests before the scheduler is stopped.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}
