//! Request validation and upstream error normalization

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::errors::GatewayError;
use crate::core::models::{PingResponse, TranslatePayload, TranslateResponse};
use crate::core::provider::TranslationProvider;

/// Message returned for any request lacking a required field
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Message returned for every upstream failure
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed";

/// Fixed `/ping` payload; existing clients match on it verbatim
pub const PING_MESSAGE: &str = "Flask backend is working!";

/// Stateless relay between callers and a translation provider
pub struct TranslationGateway {
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationGateway {
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Validate `payload`, forward it upstream once, and normalize the outcome.
    ///
    /// Upstream errors are logged here and returned as
    /// [`GatewayError::Upstream`]; callers only ever render the generic message.
    pub async fn handle_translate(
        &self,
        payload: TranslatePayload,
    ) -> Result<TranslateResponse, GatewayError> {
        let request = payload
            .into_request()
            .ok_or_else(|| GatewayError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;

        debug!(
            "Translating {} chars from {} to {}",
            request.text.chars().count(),
            request.source_lang,
            request.target_lang
        );

        match self.provider.translate(&request).await {
            Ok(translated_text) => Ok(TranslateResponse { translated_text }),
            Err(e) => {
                warn!("Translation failed: {}", e);
                Err(GatewayError::Upstream(e))
            }
        }
    }

    /// Liveness answer; never consults the provider.
    pub fn handle_ping(&self) -> PingResponse {
        PingResponse {
            message: PING_MESSAGE.to_string(),
        }
    }
}
