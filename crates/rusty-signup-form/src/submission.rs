//! Submission lifecycle, gateway seam and failure taxonomy.

use async_trait::async_trait;

use crate::registration::RegistrationPayload;

/// Shown after the gateway accepts a registration.
pub const SUCCESS_MESSAGE: &str = "Cadastrado com sucesso!";

/// Shown for every failure that does not carry a remote message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Um erro inesperado ocorreu";

/// Where a form is in its submission lifecycle.
///
/// The result message lives inside the settled variants, so a form can never
/// be submitting and failed at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// How the result line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    Success,
    Error,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The user-visible result, if the last submission has settled.
    pub fn result_message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(msg) | Self::Failed(msg) => Some(msg),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn result_tone(&self) -> Option<ResultTone> {
        match self {
            Self::Succeeded(_) => Some(ResultTone::Success),
            Self::Failed(_) => Some(ResultTone::Error),
            Self::Idle | Self::Submitting => None,
        }
    }

    /// Fold a gateway outcome into a settled state.
    pub fn settle(outcome: Result<(), SubmissionError>) -> Self {
        match outcome {
            Ok(()) => Self::Succeeded(SUCCESS_MESSAGE.to_string()),
            Err(err) => Self::Failed(err.user_message()),
        }
    }
}

/// Boxed source error for transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors a [`SubmissionGateway`] can report.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The endpoint rejected the registration with an explicit message.
    #[error("HTTP {status}: {message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, as sent.
        message: String,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[source] BoxError),

    /// The endpoint answered with an error that carries no usable message.
    #[error("Unexpected response: HTTP {status}")]
    UnexpectedResponse {
        status: u16,
        /// Raw response body, if available.
        body: Option<String>,
    },

    /// Anything else, including a gateway that panicked.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SubmissionError {
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    pub fn network(err: impl Into<BoxError>) -> Self {
        Self::Network(err.into())
    }

    /// The remote message, for structured failures only.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The text shown to the user. Raw transport detail never leaks here.
    pub fn user_message(&self) -> String {
        match self.remote_message() {
            Some(message) => normalize_remote_message(message),
            None => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Turn a `snake_case` reason into space-separated words.
pub fn normalize_remote_message(message: &str) -> String {
    message.replace('_', " ")
}

/// The remote collaborator that persists a registration.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), SubmissionError>;
}

#[async_trait]
impl<G: SubmissionGateway + ?Sized> SubmissionGateway for std::sync::Arc<G> {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), SubmissionError> {
        (**self).submit(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("usuario_ja_existe", "usuario ja existe")]
    #[case("codigo_de_acesso_invalido", "codigo de acesso invalido")]
    #[case("sem separadores", "sem separadores")]
    #[case("__", "  ")]
    fn test_normalize_remote_message(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_remote_message(raw), expected);
    }

    #[test]
    fn test_user_message_by_kind() {
        assert_eq!(
            SubmissionError::remote(400, "usuario_ja_existe").user_message(),
            "usuario ja existe"
        );
        assert_eq!(
            SubmissionError::network("connection refused").user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            SubmissionError::UnexpectedResponse {
                status: 500,
                body: Some("<html>".to_string()),
            }
            .user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            SubmissionError::Unexpected("boom".to_string()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_settle() {
        assert_eq!(
            SubmissionState::settle(Ok(())),
            SubmissionState::Succeeded(SUCCESS_MESSAGE.to_string())
        );
        let failed = SubmissionState::settle(Err(SubmissionError::remote(409, "email_em_uso")));
        assert_eq!(failed.result_message(), Some("email em uso"));
        assert_eq!(failed.result_tone(), Some(ResultTone::Error));
    }

    #[test]
    fn test_idle_and_submitting_have_no_result() {
        assert_eq!(SubmissionState::Idle.result_message(), None);
        assert_eq!(SubmissionState::Submitting.result_tone(), None);
        assert!(SubmissionState::Submitting.is_submitting());
        assert!(!SubmissionState::default().is_submitting());
    }
}
