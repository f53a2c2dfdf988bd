//! Application configuration loaded from environment variables.

use payload::Variant;

use crate::error::ConfigError;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: the variant's default port)
/// - `RESPONDER_VARIANT` — payload variant slug (default: `"app-v1"`)
/// - `METRICS_PORT` — Prometheus exporter port (default: disabled)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub variant: Variant,
    pub metrics_port: Option<u16>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let variant = match lookup("RESPONDER_VARIANT") {
            Some(slug) => slug.parse()?,
            None => Variant::default(),
        };
        let port = match lookup("PORT") {
            Some(value) => parse_port("PORT", value)?,
            None => variant.default_port(),
        };
        let metrics_port = lookup("METRICS_PORT")
            .map(|value| parse_port("METRICS_PORT", value))
            .transpose()?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            variant,
            metrics_port,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        join_host_port(&self.host, self.port)
    }

    /// Returns the `"host:port"` address of the metrics exporter, if enabled.
    pub fn metrics_addr(&self) -> Option<String> {
        self.metrics_port.map(|port| join_host_port(&self.host, port))
    }
}

impl Default for Config {
    fn default() -> Self {
        let variant = Variant::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: variant.default_port(),
            variant,
            metrics_port: None,
        }
    }
}

/// IPv6 literals need brackets before a port can be appended.
fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort { var, value })
}
