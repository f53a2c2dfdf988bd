//! Responder entry point.

use responder::{Config, ServerError};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn run(config: Config) -> Result<(), ServerError> {
    // 1. Optional Prometheus exporter on its own listener
    if let Some(metrics_addr) = responder::install_metrics(&config).await? {
        tracing::info!(addr = %metrics_addr, "metrics exporter listening");
    }

    // 2. Build the application
    let app = responder::create_app(config.variant.payload());

    // 3. Start server
    let addr = config.addr();
    let listener = responder::bind(&addr).await?;
    let port = listener.local_addr().map(|a| a.port()).unwrap_or(config.port);
    tracing::info!(%addr, variant = %config.variant, "starting responder");
    tracing::info!("server running on http://localhost:{port}");

    responder::serve(listener, app, shutdown_signal()).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match Config::from_env() {
        Ok(config) => run(config).await,
        Err(err) => Err(err.into()),
    };
    result.inspect_err(|err| {
        tracing::error!(error = %err, "responder stopped");
    })
}
