//! Prometheus exporter setup.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::{Config, ServerError};

/// Resolves the exporter address the same way the main listener resolves
/// `HOST`, so hostnames and IPv6 literals are accepted.
///
/// Returns `None` when `METRICS_PORT` is unset.
pub async fn resolve_metrics_addr(config: &Config) -> Result<Option<SocketAddr>, ServerError> {
    let Some(addr) = config.metrics_addr() else {
        return Ok(None);
    };

    let resolved = tokio::net::lookup_host(addr.as_str())
        .await
        .and_then(|mut addrs| {
            addrs
                .next()
                .ok_or_else(|| std::io::Error::other("no addresses resolved"))
        });

    match resolved {
        Ok(socket) => Ok(Some(socket)),
        Err(source) => Err(ServerError::MetricsAddr { addr, source }),
    }
}

/// Installs the global Prometheus recorder with its own HTTP listener.
///
/// Must be called from within a Tokio runtime. Returns the exporter's
/// address, or `None` when metrics are disabled.
pub async fn install_metrics(config: &Config) -> Result<Option<SocketAddr>, ServerError> {
    let Some(socket) = resolve_metrics_addr(config).await? else {
        return Ok(None);
    };

    PrometheusBuilder::new().with_http_listener(socket).install()?;
    Ok(Some(socket))
}
