//! Upstream translation provider interface

use async_trait::async_trait;

use crate::core::errors::Result;
use crate::core::models::TranslationRequest;

/// Something that can translate one text segment for a language pair.
///
/// Implementations are shared across request tasks, so they must be
/// `Send + Sync` and hold no per-request state.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `request.text` and return the translated text
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;
}
