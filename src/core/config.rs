//! Configuration management

use tracing::warn;

/// Default Microsoft Translator endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com/translate";

/// Default Azure resource region
pub const DEFAULT_REGION: &str = "ukwest";

/// Translator API protocol version sent with every request
pub const API_VERSION: &str = "3.0";

/// Upper bound for `max_retries`
pub const MAX_RETRIES_LIMIT: u32 = 5;

/// Longest single backoff between retries
pub const MAX_RETRY_DELAY_MS: u64 = 10_000;

/// Configuration for the gateway, read once at startup
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub region: String,
    pub api_endpoint: String,
    pub host: String,
    pub port: u16,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: DEFAULT_REGION.to_string(),
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            timeout_ms: 30000,
            max_retries: 0,
            retry_delay_ms: 500,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparseable numbers are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup("MICROSOFT_TRANSLATE_API_KEY").unwrap_or_default();

        let region = lookup("MICROSOFT_TRANSLATE_REGION").unwrap_or(defaults.region);

        let api_endpoint = lookup("MICROSOFT_TRANSLATE_ENDPOINT").unwrap_or(defaults.api_endpoint);

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", v, e))?,
            None => defaults.port,
        };

        let timeout_ms = match lookup("REQUEST_TIMEOUT_MS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("invalid REQUEST_TIMEOUT_MS {:?}: {}", v, e))?,
            None => defaults.timeout_ms,
        };

        let max_retries = match lookup("MAX_RETRIES") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|e| anyhow::anyhow!("invalid MAX_RETRIES {:?}: {}", v, e))?,
            None => defaults.max_retries,
        };

        let retry_delay_ms = match lookup("RETRY_DELAY_MS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("invalid RETRY_DELAY_MS {:?}: {}", v, e))?,
            None => defaults.retry_delay_ms,
        };

        Ok(Self {
            api_key,
            region,
            api_endpoint,
            host,
            port,
            timeout_ms,
            max_retries,
            retry_delay_ms,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            // Startup proceeds; every translate call will be rejected upstream.
            warn!("MICROSOFT_TRANSLATE_API_KEY is not set, translation requests will fail");
        }

        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if self.port == 0 {
            return Err(anyhow::anyhow!("port must be greater than 0"));
        }

        if self.max_retries > MAX_RETRIES_LIMIT {
            return Err(anyhow::anyhow!(
                "max_retries must be at most {}, got {}",
                MAX_RETRIES_LIMIT,
                self.max_retries
            ));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
