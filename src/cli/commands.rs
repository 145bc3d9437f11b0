//! CLI command definitions and handlers

use clap::Subcommand;
use std::sync::Arc;
use tracing::info;

use crate::core::client::MicrosoftTranslator;
use crate::core::config::GatewayConfig;
use crate::core::gateway::TranslationGateway;
use crate::core::models::TranslatePayload;

/// Commands for the translation gateway
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server (the default when no command is given)
    Server {
        /// Bind address (default: HOST env var, else 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: PORT env var, else 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Translate one text segment through the upstream provider and print it
    Translate {
        /// Source language code
        #[arg(long = "from")]
        source_lang: String,

        /// Target language code
        #[arg(long = "to")]
        target_lang: String,

        /// Text to translate
        text: String,
    },
}

/// Handle server command
pub async fn handle_server(
    mut config: GatewayConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Starting HTTP server on {}", config.bind_addr());
    run_server(config).await
}

/// Handle one-shot translate command
pub async fn handle_translate(
    config: GatewayConfig,
    source_lang: String,
    target_lang: String,
    text: String,
) -> anyhow::Result<()> {
    config.validate()?;

    let translator = MicrosoftTranslator::new(&config)?;
    let gateway = TranslationGateway::new(Arc::new(translator));

    let response = gateway
        .handle_translate(TranslatePayload::new(source_lang, target_lang, text))
        .await?;

    println!("{}", response.translated_text);
    Ok(())
}
