//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Body of `POST /translate` as sent by the client.
///
/// Every field is optional at the wire level so that a missing field and an
/// empty one are both reported as a validation failure by the gateway.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslatePayload {
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub text: Option<String>,
}

impl TranslatePayload {
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_lang: Some(source_lang.into()),
            target_lang: Some(target_lang.into()),
            text: Some(text.into()),
        }
    }

    /// Turn the payload into a request the provider can act on.
    ///
    /// Returns `None` when any field is absent or empty.
    pub fn into_request(self) -> Option<TranslationRequest> {
        let source_lang = self.source_lang.filter(|s| !s.is_empty())?;
        let target_lang = self.target_lang.filter(|s| !s.is_empty())?;
        let text = self.text.filter(|s| !s.is_empty())?;

        Some(TranslationRequest {
            source_lang,
            target_lang,
            text,
        })
    }
}

/// A validated translation request: one segment, one language pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub text: String,
}

/// Successful `POST /translate` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Failure body shared by every error status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// `GET /ping` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// One element of the upstream request body (`[{"text": ...}]`)
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamTextItem<'a> {
    pub text: &'a str,
}
