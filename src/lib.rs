//! Translation Gateway - HTTP relay in front of Microsoft Translator
//!
//! This library validates translation requests, forwards them to the upstream
//! provider, and normalizes every upstream failure to a single error shape.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::MicrosoftTranslator,
    config::GatewayConfig,
    errors::{GatewayError, TranslationError},
    gateway::TranslationGateway,
    models::{ErrorResponse, PingResponse, TranslatePayload, TranslateResponse, TranslationRequest},
    provider::TranslationProvider,
};

pub use crate::server::api::{build_router, run_server};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
