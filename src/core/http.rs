//! Shared HTTP transport for both remote handles.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::GatewayError;

/// Transport settings applied to every request.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: None,
        }
    }
}

/// Thin wrapper around reqwest doing one POST round trip per call.
///
/// No retry, no backoff. Transient failures surface to the caller unchanged.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, GatewayError> {
        let default_ua = format!("llmgate/{}", env!("CARGO_PKG_VERSION"));
        let ua = config.user_agent.as_deref().unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// POST a JSON body with bearer auth and decode a JSON response.
    ///
    /// Non-2xx statuses become `Api` errors with the body text preserved.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, bearer_token, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        bearer_token: &str,
        body: &Req,
    ) -> Result<Res, GatewayError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let res = self
            .client
            .post(url)
            .bearer_auth(bearer_token)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Network {
                message: format!("request to {url} failed"),
                source: Box::new(e),
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            let error_text = res
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::Api {
                message: error_text,
                status_code: status.as_u16(),
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_text = res.text().await.map_err(|e| GatewayError::Network {
            message: "failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        serde_json::from_str(&response_text).map_err(|e| GatewayError::SchemaMismatch {
            message: "response body is not a valid API payload".to_string(),
            source: Some(Box::new(e)),
        })
    }
}
