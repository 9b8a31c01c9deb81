//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Instant;

use pixelgate_upstream::GenerateClient;

use crate::config::GatewayConfig;

/// State shared by every request handler.
///
/// The upstream client is constructed once at startup and shared; each chat
/// request still owns its own buffer and stream, so nothing here is mutated
/// per-request.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream generation service.
    pub upstream: Arc<GenerateClient>,
    /// Generation budget applied to every request.
    pub max_tokens: u32,
    /// Sampling temperature applied to every request.
    pub temperature: f64,
    /// Server start time, for the health endpoint.
    pub start_time: Instant,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: &GatewayConfig) -> Self {
        let upstream = GenerateClient::new()
            .base_url(config.upstream_url.clone())
            .model(config.model.clone());
        Self {
            upstream: Arc::new(upstream),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            start_time: Instant::now(),
        }
    }

    /// Server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_carries_config_values() {
        let config = GatewayConfig {
            max_tokens: 99,
            temperature: 0.2,
            ..GatewayConfig::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.max_tokens, 99);
        assert_eq!(state.temperature, 0.2);
    }

    #[test]
    fn uptime_starts_near_zero() {
        let state = AppState::new(&GatewayConfig::default());
        assert!(state.uptime_seconds() < 5);
    }
}
