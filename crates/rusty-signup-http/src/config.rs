//! Gateway configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Endpoint the registration is posted to when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://3.221.159.196:3320/auth/cadastrar";

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "RUSTY_SIGNUP_ENDPOINT";

/// Default configuration file name
pub const CONFIG_FILE: &str = "rusty-signup.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported endpoint scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Runtime gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Where the registration is posted
    pub endpoint: Url,

    /// Whole-request timeout
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Accept self-signed certificates (the default endpoint is a bare IP)
    pub accept_invalid_certs: bool,

    /// Honour HTTP(S)_PROXY from the environment
    pub system_proxy: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint_url(),
            timeout: Duration::from_secs(default_timeout_secs()),
            user_agent: default_user_agent(),
            accept_invalid_certs: false,
            system_proxy: true,
        }
    }
}

fn default_endpoint_url() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_system_proxy() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("rusty-signup/{}", env!("CARGO_PKG_VERSION"))
}

impl GatewayConfig {
    /// Load from `rusty-signup.toml` in the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found, using default gateway config", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let file: SignupTomlConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        file.gateway.to_runtime_config()
    }

    /// Apply the `RUSTY_SIGNUP_ENDPOINT` environment override, if set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let endpoint = std::env::var(ENDPOINT_ENV).ok();
        self.with_endpoint(endpoint.as_deref())
    }

    /// Replace the endpoint when `endpoint` is given and non-empty.
    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.endpoint = parse_endpoint(endpoint)?;
        }
        Ok(self)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// Top level of `rusty-signup.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupTomlConfig {
    #[serde(default)]
    pub gateway: GatewayTomlConfig,
}

/// `[gateway]` section in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayTomlConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub accept_invalid_certs: bool,

    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
}

impl Default for GatewayTomlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            accept_invalid_certs: false,
            system_proxy: default_system_proxy(),
        }
    }
}

impl GatewayTomlConfig {
    /// Convert TOML config to runtime config
    pub fn to_runtime_config(&self) -> Result<GatewayConfig, ConfigError> {
        Ok(GatewayConfig {
            endpoint: parse_endpoint(&self.endpoint)?,
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
            accept_invalid_certs: self.accept_invalid_certs,
            system_proxy: self.system_proxy,
        })
    }
}
