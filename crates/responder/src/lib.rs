//! Single-route HTTP service.
//!
//! Answers `GET /` with a fixed JSON payload. Every other path and method
//! falls through to axum's defaults (404 and 405).

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use payload::Payload;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ConfigError, ServerError};
pub use telemetry::{install_metrics, resolve_metrics_addr};

/// Creates the Axum application router serving `payload` at `/`.
pub fn create_app(payload: Payload) -> Router {
    Router::new()
        .route("/", get(routes::root::handle_root))
        .with_state(payload)
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
