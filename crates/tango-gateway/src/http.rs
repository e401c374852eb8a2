//! HTTP high-score gateway.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use tango_core::error::GatewayError;
use tango_core::traits::{HighScore, HighScoreGateway, SubmitOutcome, SubmitRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Talks to `{base_url}/api/highscore`.
pub struct HttpGateway {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct PingBody {
    #[serde(default)]
    ok: bool,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, GatewayError> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GatewayError::NetworkError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            GatewayError::NetworkError(format!(
                "high-score server not reachable at {}",
                self.base_url
            ))
        } else {
            GatewayError::NetworkError(e.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(GatewayError::ApiError { status, message });
        }
        Ok(response)
    }

    /// Whether the server answers `GET /api/ping` with `{"ok": true}`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn ping(&self) -> Result<bool, GatewayError> {
        let response = self
            .client
            .get(format!("{}/api/ping", self.base_url))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;
        let body: PingBody = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("failed to parse ping: {e}")))?;
        Ok(body.ok)
    }
}

#[async_trait]
impl HighScoreGateway for HttpGateway {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_best(&self) -> Result<HighScore, GatewayError> {
        let response = self
            .client
            .get(format!("{}/api/highscore", self.base_url))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("failed to parse best score: {e}")))
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn submit_score(&self, score: u64) -> Result<SubmitOutcome, GatewayError> {
        let response = self
            .client
            .post(format!("{}/api/highscore", self.base_url))
            .json(&SubmitRequest { score })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("invalid submit reply: {e}")))
    }
}
