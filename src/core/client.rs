//! Microsoft Translator client

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::core::config::{GatewayConfig, API_VERSION, MAX_RETRY_DELAY_MS};
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, UpstreamTextItem};
use crate::core::provider::TranslationProvider;

/// Header carrying the subscription key
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header carrying the resource region
const REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// Translation provider backed by the Microsoft Translator v3 REST API
#[derive(Debug, Clone)]
pub struct MicrosoftTranslator {
    client: reqwest::Client,
    api_key: String,
    region: String,
    api_endpoint: String,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl MicrosoftTranslator {
    /// Create a new client from gateway configuration
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            region: config.region.clone(),
            api_endpoint: config.api_endpoint.clone(),
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }

    /// Send one request, retrying transport failures up to `max_retries` times
    async fn translate_with_retry(&self, request: &TranslationRequest) -> Result<String> {
        let mut attempt = 0;

        loop {
            if attempt > 0 {
                let delay = backoff_delay_ms(self.retry_delay_ms, attempt);
                debug!("Retry attempt {} in {}ms", attempt, delay);
                sleep(Duration::from_millis(delay)).await;
            }

            match self.send_request(request).await {
                Ok(translation) => {
                    if attempt > 0 {
                        info!("Successfully translated after {} retries", attempt);
                    }
                    return Ok(translation);
                }
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    debug!("Transient upstream failure: {}", e);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Send actual HTTP request
    async fn send_request(&self, request: &TranslationRequest) -> Result<String> {
        let body = [UpstreamTextItem {
            text: &request.text,
        }];

        let mut builder = self
            .client
            .post(&self.api_endpoint)
            .query(&[
                ("api-version", API_VERSION),
                ("from", request.source_lang.as_str()),
                ("to", request.target_lang.as_str()),
            ])
            .header("Content-Type", "application/json")
            .json(&body);

        if !self.api_key.is_empty() {
            builder = builder.header(KEY_HEADER, &self.api_key);
        }
        if !self.region.is_empty() {
            builder = builder.header(REGION_HEADER, &self.region);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        extract_translation(&json)
    }
}

#[async_trait]
impl TranslationProvider for MicrosoftTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        self.translate_with_retry(request).await
    }
}

/// Exponential backoff for retry `attempt` (1-based), capped at `MAX_RETRY_DELAY_MS`
fn backoff_delay_ms(base_ms: u64, attempt: u32) -> u64 {
    2_u64
        .saturating_pow(attempt.saturating_sub(1))
        .saturating_mul(base_ms)
        .min(MAX_RETRY_DELAY_MS)
}

/// Pull `[0].translations[0].text` out of an upstream response
fn extract_translation(json: &serde_json::Value) -> Result<String> {
    json.get(0)
        .and_then(|result| result["translations"].get(0))
        .and_then(|translation| translation["text"].as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| TranslationError::InvalidResponseError {
            message: format!("No translation in response: {}", json),
        })
}
