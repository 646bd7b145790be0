//! # rusty-signup
//!
//! A registration form engine: fields validated on blur, whole-form validity,
//! and a submission lifecycle that always ends in a user-facing message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_signup::{FieldName, RegistrationForm};
//! use rusty_signup::http::{GatewayConfig, HttpGateway};
//!
//! let gateway = HttpGateway::new(GatewayConfig::load()?.with_env_overrides()?)?;
//! let mut form = RegistrationForm::new();
//!
//! form.change(FieldName::Nome, "Maria");
//! form.blur(FieldName::Nome);
//! // ... fill in the remaining fields
//!
//! if form.can_submit() {
//!     form.submit(&gateway).await;
//! }
//! println!("{}", form.result_message().unwrap_or_default());
//! ```
//!
//! ## Features
//!
//! - **`validation`** - Include the rule functions for custom validators
//! - **`http`** - Include the reqwest-backed `HttpGateway`
//!
//! Both are on by default.
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper that re-exports three component crates:
//!
//! - **`rusty-signup-form`** - Field controllers, form aggregator, submission state
//! - **`rusty-signup-validation`** - Rule functions (required, e-mail, password)
//! - **`rusty-signup-http`** - JSON-over-HTTP submission gateway and its configuration

// Re-export the engine (always available)
pub use rusty_signup_form::*;

// Re-export validation module (if feature enabled)
#[cfg(feature = "validation")]
pub use rusty_signup_validation as validation;

// Re-export gateway module (if feature enabled)
#[cfg(feature = "http")]
pub use rusty_signup_http as http;

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    #[async_trait]
    impl SubmissionGateway for AcceptAll {
        async fn submit(&self, _payload: &RegistrationPayload) -> Result<(), SubmissionError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_facade_exposes_engine() {
        let mut form = RegistrationForm::new();
        form.change(FieldName::Nome, "Maria");
        form.change(FieldName::Email, "maria@example.com");
        form.change(FieldName::Senha, "S3nh@!123");
        form.change(FieldName::ConfirmacaoSenha, "S3nh@!123");
        form.change(FieldName::CodigoAcesso, "abc");

        form.submit(&AcceptAll).await;
        assert_eq!(form.result_message(), Some(SUCCESS_MESSAGE));
    }

    #[cfg(feature = "validation")]
    #[test]
    fn test_validation_reexport() {
        assert!(validation::is_valid_email("maria@example.com"));
    }
}
