// Transpiler service client implementation
//
// Thin wrapper over the three REST endpoints: health probe, transpile
// and decompile. Transform responses are returned verbatim whatever the
// HTTP status; only transport failures and non-JSON bodies are errors.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::types::{DecompileRequest, TransformResponse, TranspileRequest};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const TRANSPILE_ENDPOINT: &str = "/api/v1/transpile";
const DECOMPILE_ENDPOINT: &str = "/api/v1/decompile";

/// Configuration for the service connection
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g., "http://localhost:3000")
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// HTTP client for the INAV transpiler service
pub struct TranspilerClient {
    base_url: String,
    client: Client,
}

impl TranspilerClient {
    /// Create a new client against the configured base URL.
    ///
    /// No request timeout is set; a hung service hangs the invocation.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    /// Check whether the service health endpoint responds with 200.
    ///
    /// Transport failures of any kind map to `false`; this never raises.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                debug!(url = %url, "Health check succeeded");
                true
            }
            Ok(response) => {
                debug!(url = %url, status = %response.status(), "Health check failed");
                false
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Health check request failed");
                false
            }
        }
    }

    /// Transpile JavaScript source into INAV commands.
    ///
    /// Semantic failures are reported inside the decoded body, not as
    /// errors here.
    pub async fn transpile(&self, code: &str) -> Result<TransformResponse> {
        let request = TranspileRequest {
            code: code.to_string(),
        };

        let url = format!("{}{}", self.base_url, TRANSPILE_ENDPOINT);
        debug!(url = %url, "Sending transpile request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to transpiler service")?
            .json()
            .await
            .context("Failed to parse response from transpiler service")?;

        Ok(response)
    }

    /// Decompile INAV commands back into JavaScript.
    pub async fn decompile(&self, commands: &[String]) -> Result<TransformResponse> {
        let request = DecompileRequest {
            commands: commands.to_vec(),
        };

        let url = format!("{}{}", self.base_url, DECOMPILE_ENDPOINT);
        debug!(url = %url, count = commands.len(), "Sending decompile request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to transpiler service")?
            .json()
            .await
            .context("Failed to parse response from transpiler service")?;

        Ok(response)
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_health_check_fails_for_unreachable_server() {
        let client = TranspilerClient::new(ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
        })
        .unwrap();
        assert!(!client.health_check().await);
    }
}
