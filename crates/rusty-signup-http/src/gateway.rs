//! `reqwest` implementation of the submission gateway

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use rusty_signup_form::{RegistrationPayload, SubmissionError, SubmissionGateway};
use serde::Deserialize;
use url::Url;

use crate::config::{ConfigError, GatewayConfig};

/// Posts registrations as JSON to the configured endpoint.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Example
///
/// ```ignore
/// use rusty_signup_http::{GatewayConfig, HttpGateway};
///
/// let gateway = HttpGateway::new(GatewayConfig::load()?)?;
/// form.submit(&gateway).await;
/// ```
#[derive(Clone)]
pub struct HttpGateway {
    inner: Arc<HttpGatewayInner>,
}

struct HttpGatewayInner {
    endpoint: Url,
    http_client: Client,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http_client = builder.build()?;

        Ok(Self {
            inner: Arc::new(HttpGatewayInner {
                endpoint: config.endpoint,
                http_client,
            }),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish()
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), SubmissionError> {
        tracing::debug!(endpoint = %self.inner.endpoint, "posting registration");

        let response = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(SubmissionError::network)?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "registration accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let err = classify_failure(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), "registration rejected: {}", err);
        Err(err)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Classify a non-2xx response.
///
/// A JSON body with a string `message` is a structured remote failure;
/// anything else (no body, HTML, a non-string message) is unexpected.
pub fn classify_failure(status: u16, body: &str) -> SubmissionError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(serde_json::Value::String(message)),
        }) => SubmissionError::remote(status, message),
        _ => SubmissionError::UnexpectedResponse {
            status,
            body: (!body.is_empty()).then(|| body.to_string()),
        },
    }
}
