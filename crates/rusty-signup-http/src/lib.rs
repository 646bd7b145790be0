//! # rusty-signup-http
//!
//! HTTP [`SubmissionGateway`](rusty_signup_form::SubmissionGateway) for the
//! registration form.
//!
//! - JSON `POST` of `{nome, email, senha, codigoAcesso}` to one endpoint
//! - 2xx is success; an error body with a string `message` becomes
//!   `SubmissionError::Remote`, anything else is unexpected
//! - Endpoint, timeout and TLS leniency come from `rusty-signup.toml`,
//!   overridable through `RUSTY_SIGNUP_ENDPOINT`
//!
//! ## Configuration
//!
//! ```toml
//! [gateway]
//! endpoint = "https://3.221.159.196:3320/auth/cadastrar"
//! timeout_secs = 30
//! accept_invalid_certs = false
//! ```

pub mod config;
pub mod gateway;

pub use config::{
    ConfigError, GatewayConfig, GatewayTomlConfig, SignupTomlConfig, CONFIG_FILE, DEFAULT_ENDPOINT,
    ENDPOINT_ENV,
};
pub use gateway::{classify_failure, HttpGateway};
