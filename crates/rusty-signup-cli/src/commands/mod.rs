pub mod check;
pub mod register;
pub mod submit;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rusty_signup::http::{GatewayConfig, HttpGateway, CONFIG_FILE};

/// Global flags that shape the submission gateway
pub struct GatewayArgs {
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
}

impl GatewayArgs {
    /// Resolve the gateway: config file, then environment, then `--endpoint`.
    pub fn build(&self) -> Result<HttpGateway> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        let config = GatewayConfig::load_from(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .with_env_overrides()
            .context("Invalid endpoint in environment")?
            .with_endpoint(self.endpoint.as_deref())
            .context("Invalid --endpoint")?;

        tracing::debug!(endpoint = %config.endpoint, "gateway configured");
        HttpGateway::new(config).context("Failed to create submission gateway")
    }
}
