//! Generation client struct and builder.

use std::time::Duration;

use pixelgate_types::UpstreamError;

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::{stream_generation, GenerateStream};
use crate::types::{ApiRequest, GenerateRequest};

/// Default model used when the request does not specify one.
const DEFAULT_MODEL: &str = "phi";

/// Default base URL of the local generation service.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// How long the initial connection to the upstream may block before failing.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the upstream `/api/generate` endpoint.
///
/// The upstream is local, so there are no auth headers. The client is cheap
/// to clone (it shares one connection pool) and holds no per-request state.
///
/// # Example
///
/// ```no_run
/// use pixelgate_upstream::GenerateClient;
///
/// let client = GenerateClient::new()
///     .model("phi")
///     .base_url("http://localhost:11434");
/// ```
#[derive(Clone)]
pub struct GenerateClient {
    /// Default model identifier used when the request does not specify one.
    pub(crate) model: String,
    /// API base URL (override for testing or remote instances).
    pub(crate) base_url: String,
    /// Connect timeout applied when the client was built.
    pub(crate) connect_timeout: Duration,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl GenerateClient {
    /// Create a client with the default local endpoint and a 30-second
    /// connect timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_connect_timeout(DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a client with a custom connect timeout.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, matching
    /// [`reqwest::Client::new`].
    #[must_use]
    pub fn with_connect_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .expect("HTTP client initialization failed");
        Self {
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            connect_timeout: timeout,
            client,
        }
    }

    /// Override the default model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing with a local mock server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the generate endpoint URL.
    pub(crate) fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Send a streaming generation request.
    ///
    /// Posts `{model, prompt, max_tokens, stream: true, temperature}` and
    /// returns the NDJSON event stream. Errors here occur before any frame
    /// has been sent downstream, so the gateway can still answer with an
    /// HTTP status; failures after this point surface inside the stream.
    pub async fn generate_stream(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateStream, UpstreamError> {
        let url = self.generate_url();
        let model = request.model.as_deref().unwrap_or(&self.model);
        let body = ApiRequest {
            model,
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
            stream: true,
            temperature: request.temperature,
        };

        tracing::debug!(url = %url, model = %model, "sending streaming generate request");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, self.connect_timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .map_err(|e| map_reqwest_error(e, self.connect_timeout))?;
            return Err(map_http_status(status, &body_text));
        }

        Ok(stream_generation(response))
    }
}

impl Default for GenerateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_set() {
        let client = GenerateClient::new();
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn default_base_url_is_set() {
        let client = GenerateClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn default_connect_timeout_is_thirty_seconds() {
        let client = GenerateClient::new();
        assert_eq!(client.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_overrides_model() {
        let client = GenerateClient::new().model("mistral");
        assert_eq!(client.model, "mistral");
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = GenerateClient::new().base_url("http://remote:11434");
        assert_eq!(client.base_url, "http://remote:11434");
    }

    #[test]
    fn generate_url_includes_path() {
        let client = GenerateClient::new().base_url("http://localhost:9999");
        assert_eq!(client.generate_url(), "http://localhost:9999/api/generate");
    }

    #[test]
    fn default_impl_matches_new() {
        let client = GenerateClient::default();
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
