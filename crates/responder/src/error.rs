//! Startup and serving errors.

use payload::UnknownVariant;
use thiserror::Error;

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A port variable was not a valid `u16`.
    #[error("Invalid port in {var}: {value:?}")]
    InvalidPort { var: &'static str, value: String },

    /// The variant slug was not recognized.
    #[error(transparent)]
    Variant(#[from] UnknownVariant),
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The listener could not be bound, e.g. the port is already in use.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The exporter address did not resolve to a socket address.
    #[error("Invalid metrics exporter address {addr}: {source}")]
    MetricsAddr {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}
