//! Main entry point for the translation gateway

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translation_gateway::cli::commands::{self, Commands};
use translation_gateway::GatewayConfig;

/// Translation Gateway - HTTP relay for Microsoft Translator
#[derive(Parser, Debug)]
#[command(name = "translation-gateway", version, about, long_about = None)]
struct Args {
    /// Translator API key (optional, defaults to MICROSOFT_TRANSLATE_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Translator resource region (optional, defaults to MICROSOFT_TRANSLATE_REGION env var)
    #[arg(long)]
    region: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},tower_http={}",
                    env!("CARGO_CRATE_NAME"),
                    log_level,
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = GatewayConfig::from_env()?;

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }
    if let Some(region) = args.region {
        config.region = region;
    }

    info!("{} v{}", translation_gateway::NAME, translation_gateway::VERSION);

    match args.command {
        Some(Commands::Server { host, port }) => {
            commands::handle_server(config, host, port).await?;
        }
        Some(Commands::Translate {
            source_lang,
            target_lang,
            text,
        }) => {
            commands::handle_translate(config, source_lang, target_lang, text).await?;
        }
        None => {
            commands::handle_server(config, None, None).await?;
        }
    }

    Ok(())
}
