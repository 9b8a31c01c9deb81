//! Environment-derived gateway configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Default address the gateway listens on.
const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000);

/// Default base URL of the upstream generation service.
const DEFAULT_UPSTREAM_URL: &str = "http://localhost:11434";

/// Default model identifier.
const DEFAULT_MODEL: &str = "phi";

/// Default generation budget in tokens. Answers are meant to be short.
const DEFAULT_MAX_TOKENS: u32 = 150;

/// Default sampling temperature.
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Configuration read from `PIXELGATE_*` environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind.
    pub listen_addr: SocketAddr,
    /// Base URL of the upstream generation service.
    pub upstream_url: String,
    /// Model requested from the upstream.
    pub model: String,
    /// Generation budget passed to the upstream.
    pub max_tokens: u32,
    /// Sampling temperature passed to the upstream.
    pub temperature: f64,
}

/// A configuration variable that was present but unparseable.
#[derive(Debug, Error)]
#[error("invalid {name}: {value:?}")]
pub struct ConfigError {
    /// The environment variable name.
    pub name: &'static str,
    /// The rejected value.
    pub value: String,
}

impl GatewayConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for unset variables. Set but unparseable variables are an error, not
    /// a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            listen_addr: parsed_var("PIXELGATE_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?,
            upstream_url: string_var("PIXELGATE_UPSTREAM_URL", DEFAULT_UPSTREAM_URL),
            model: string_var("PIXELGATE_MODEL", DEFAULT_MODEL),
            max_tokens: parsed_var("PIXELGATE_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            temperature: parsed_var("PIXELGATE_TEMPERATURE", DEFAULT_TEMPERATURE)?,
        })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
            upstream_url: DEFAULT_UPSTREAM_URL.into(),
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

fn string_var(name: &'static str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError { name, value: raw }),
        Err(_) => Ok(default),
    }
}
