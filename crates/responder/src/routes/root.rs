//! Root endpoint.

use axum::Json;
use axum::extract::State;
use payload::Payload;

/// GET / — returns the configured fixed payload.
pub async fn handle_root(State(payload): State<Payload>) -> Json<Payload> {
    metrics::counter!("root_requests_total").increment(1);
    Json(payload)
}
