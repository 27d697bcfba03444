//! OpenAI-compatible chat-completions gateway client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GatewaySettings;
use crate::error::RoastError;
use crate::types::{GenerationRequest, GenerationResponse};
use crate::util::timeout::with_timeout;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::provider::ProviderKey;
use super::GenerationClient;

/// Result of probing the gateway's model listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayHealth {
    pub healthy: bool,
    pub status: u16,
    pub checked_at: DateTime<Utc>,
}

/// Sends verse requests to a chat-completions endpoint, routing each actor
/// through a `provider/model` identifier.
pub struct GatewayClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GatewayClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Build from gateway settings; a missing token is a configuration error.
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, RoastError> {
        let api_key = settings.api_key.clone().ok_or_else(|| {
            RoastError::Configuration(
                "Missing gateway token: set VERCEL_OIDC_TOKEN or AI_GATEWAY_API_KEY".into(),
            )
        })?;
        Ok(Self::new(api_key, settings.base_url.clone()).with_timeout(settings.request_timeout()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        serde_json::json!({
            "model": ProviderKey::gateway_model(&request.speaker),
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_prompt },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_output_tokens,
        })
    }

    /// Probe `GET {base}/models`. Any HTTP answer is a health verdict; only
    /// transport errors are returned as `Err`.
    pub async fn health_check(&self) -> Result<GatewayHealth, RoastError> {
        let url = format!("{}/models", self.base_url);
        let resp = with_timeout(self.timeout, async {
            Ok(shared_client()
                .get(&url)
                .headers(bearer_headers(&self.api_key))
                .send()
                .await?)
        })
        .await?;

        let status = resp.status();
        Ok(GatewayHealth {
            healthy: status.is_success(),
            status: status.as_u16(),
            checked_at: Utc::now(),
        })
    }
}

#[async_trait]
impl GenerationClient for GatewayClient {
    fn name(&self) -> &str {
        "gateway"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, RoastError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            model = %ProviderKey::gateway_model(&request.speaker),
            variant = %request.variant,
            "gateway generate"
        );

        let started = Instant::now();
        let data: ChatResponse = with_timeout(self.timeout, async {
            let resp = shared_client()
                .post(&url)
                .headers(bearer_headers(&self.api_key))
                .json(&body)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body_text = resp.text().await.unwrap_or_default();
                return Err(status_to_error(status.as_u16(), &body_text));
            }
            Ok(resp.json::<ChatResponse>().await?)
        })
        .await?;
        let latency_ms = started.elapsed().as_millis() as u64;

        let text = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(GenerationResponse {
            text,
            tokens_used: data.usage.map(|u| u.total_tokens).unwrap_or(0),
            latency_ms,
        })
    }
}

// Gateway response types (internal)

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}
