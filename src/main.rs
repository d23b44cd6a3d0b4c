mod models;
mod handlers;
mod routes;
mod docs;
mod config;

use anyhow::Context;
use config::Config;
use routes::create_app;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {

    // Load configuration
    let config = Config::load();

    // Initialize tracing
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to the configured level, but allow debug for our app
            format!("capymorph_api=debug,tower_http=debug,{log_level}").into()
        }))
        .init();

    info!("Starting server...");

    let config = config.unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    info!("CORS allowed origins: {:?}", config.allowed_origins());
    let app = create_app(&config).context("failed to build application router")?;

    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .with_context(|| format!("failed to bind to {}", config.server_address()))?;

    info!("Server running on http://{}", config.server_address());
    info!("Swagger UI available at http://{}/docs", config.server_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
