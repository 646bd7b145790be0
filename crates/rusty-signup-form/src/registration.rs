//! The registration form: five fields, aggregate validity and submission.

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::str::FromStr;

use futures::FutureExt;
use rusty_signup_validation::{passwords_match, required, strong_password, valid_email};
use serde::{Deserialize, Serialize};

use crate::field::{DependentField, Field, FieldView, ValidatedField};
use crate::submission::{
    ResultTone, SubmissionError, SubmissionGateway, SubmissionState,
};

/// Submit button text while idle or settled.
pub const SUBMIT_LABEL: &str = "Cadastrar";

/// Submit button text while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Carregando...";

/// The inputs of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Nome,
    Email,
    Senha,
    ConfirmacaoSenha,
    CodigoAcesso,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Nome,
        FieldName::Email,
        FieldName::Senha,
        FieldName::ConfirmacaoSenha,
        FieldName::CodigoAcesso,
    ];

    /// Input name, also the payload key where one exists.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Nome => "nome",
            FieldName::Email => "email",
            FieldName::Senha => "senha",
            FieldName::ConfirmacaoSenha => "confirmacaoSenha",
            FieldName::CodigoAcesso => "codigoAcesso",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Nome => "Nome",
            FieldName::Email => "e-mail",
            FieldName::Senha => "Senha",
            FieldName::ConfirmacaoSenha => "Confirmação de Senha",
            FieldName::CodigoAcesso => "Código Acesso",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::CodigoAcesso => "Código de Acesso",
            other => other.label(),
        }
    }

    /// Password inputs are rendered masked.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldName::Senha | FieldName::ConfirmacaoSenha)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    /// Accepts the input key in camelCase, kebab-case or snake_case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        FieldName::ALL
            .into_iter()
            .find(|name| name.key().to_lowercase() == normalized)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// JSON body sent to the submission gateway.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub codigo_acesso: String,
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("nome", &self.nome)
            .field("email", &self.email)
            .field("senha", &"<redacted>")
            .field("codigo_acesso", &self.codigo_acesso)
            .finish()
    }
}

/// Registration form aggregator.
///
/// Owns one controller per [`FieldName`] plus the submission state. The
/// confirmation field is re-validated whenever the password changes, and
/// form validity ignores whether fields were touched.
///
/// ```
/// use rusty_signup_form::{FieldName, RegistrationForm};
///
/// let mut form = RegistrationForm::new();
/// assert!(form.is_submit_disabled());
///
/// form.change(FieldName::Email, "usernametest.com");
/// form.blur(FieldName::Email);
/// assert_eq!(
///     form.field(FieldName::Email).error_message.as_deref(),
///     Some("Formato de e-mail inválido")
/// );
/// ```
#[derive(Debug)]
pub struct RegistrationForm {
    nome: Field,
    email: Field,
    senha: Field,
    confirmacao_senha: DependentField,
    codigo_acesso: Field,
    state: SubmissionState,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            nome: Field::new(required("Nome")),
            email: Field::new(valid_email("E-mail")),
            senha: Field::new(strong_password("Senha")),
            confirmacao_senha: DependentField::new(passwords_match(), ""),
            codigo_acesso: Field::new(required("Codigo Acesso")),
            state: SubmissionState::Idle,
        }
    }

    fn control(&self, name: FieldName) -> &dyn ValidatedField {
        match name {
            FieldName::Nome => &self.nome,
            FieldName::Email => &self.email,
            FieldName::Senha => &self.senha,
            FieldName::ConfirmacaoSenha => &self.confirmacao_senha,
            FieldName::CodigoAcesso => &self.codigo_acesso,
        }
    }

    /// Change handler for one input.
    pub fn change(&mut self, name: FieldName, value: impl Into<String>) {
        let was_valid = self.is_valid();
        match name {
            FieldName::Senha => {
                self.senha.on_change(value);
                self.confirmacao_senha.revalidate(self.senha.value());
            }
            FieldName::ConfirmacaoSenha => {
                self.confirmacao_senha.on_change(value, self.senha.value());
            }
            FieldName::Nome => self.nome.on_change(value),
            FieldName::Email => self.email.on_change(value),
            FieldName::CodigoAcesso => self.codigo_acesso.on_change(value),
        }
        tracing::trace!(field = %name, valid = self.control(name).is_valid(), "field changed");
        self.log_validity_change(was_valid);
    }

    /// Blur handler for one input.
    pub fn blur(&mut self, name: FieldName) {
        let was_valid = self.is_valid();
        match name {
            FieldName::ConfirmacaoSenha => {
                self.confirmacao_senha.on_blur(self.senha.value());
            }
            FieldName::Nome => self.nome.on_blur(),
            FieldName::Email => self.email.on_blur(),
            FieldName::Senha => self.senha.on_blur(),
            FieldName::CodigoAcesso => self.codigo_acesso.on_blur(),
        }
        tracing::trace!(field = %name, error = ?self.control(name).displayed_error(), "field blurred");
        self.log_validity_change(was_valid);
    }

    fn log_validity_change(&self, was_valid: bool) {
        let is_valid = self.is_valid();
        if is_valid != was_valid {
            tracing::debug!(valid = is_valid, "form validity changed");
        }
    }

    pub fn field(&self, name: FieldName) -> FieldView {
        self.control(name).view()
    }

    /// Every field view, in display order.
    pub fn fields(&self) -> Vec<(FieldName, FieldView)> {
        FieldName::ALL
            .into_iter()
            .map(|name| (name, self.field(name)))
            .collect()
    }

    /// All messages for a field, regardless of touched state.
    pub fn errors(&self, name: FieldName) -> &[String] {
        self.control(name).errors()
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.control(name).is_touched()
    }

    /// True iff every field is valid; touched state plays no part.
    pub fn is_valid(&self) -> bool {
        FieldName::ALL
            .into_iter()
            .all(|name| self.control(name).is_valid())
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.state.is_submitting()
    }

    /// Disabled flag for the submit control.
    pub fn is_submit_disabled(&self) -> bool {
        !self.can_submit()
    }

    pub fn button_label(&self) -> &'static str {
        if self.state.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn result_message(&self) -> Option<&str> {
        self.state.result_message()
    }

    pub fn result_tone(&self) -> Option<ResultTone> {
        self.state.result_tone()
    }

    /// Payload built from the current values.
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            nome: self.nome.value().to_string(),
            email: self.email.value().to_string(),
            senha: self.senha.value().to_string(),
            codigo_acesso: self.codigo_acesso.value().to_string(),
        }
    }

    /// Enter `Submitting` and hand out the payload to send.
    ///
    /// Returns `None` and leaves the state alone when the submit control is
    /// disabled. Any previous result message is cleared.
    pub fn begin_submission(&mut self) -> Option<RegistrationPayload> {
        if !self.can_submit() {
            tracing::warn!(
                valid = self.is_valid(),
                submitting = self.state.is_submitting(),
                "submission refused while submit is disabled"
            );
            return None;
        }

        self.state = SubmissionState::Submitting;
        tracing::debug!("submission started");
        Some(self.payload())
    }

    /// Leave `Submitting` with the gateway's outcome.
    pub fn complete_submission(&mut self, outcome: Result<(), SubmissionError>) {
        match &outcome {
            Ok(()) => tracing::info!("registration submitted"),
            Err(err) => tracing::warn!("registration failed: {}", err),
        }
        self.state = SubmissionState::settle(outcome);
    }

    /// Submit through `gateway` and fold the result into the form state.
    ///
    /// The busy state is always cleared, even if the gateway panics.
    pub async fn submit<G>(&mut self, gateway: &G) -> &SubmissionState
    where
        G: SubmissionGateway + ?Sized,
    {
        let Some(payload) = self.begin_submission() else {
            return &self.state;
        };

        let outcome = AssertUnwindSafe(gateway.submit(&payload))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "gateway panicked".to_string());
                tracing::error!("submission gateway panicked: {}", reason);
                Err(SubmissionError::Unexpected(reason))
            });

        self.complete_submission(outcome);
        &self.state
    }

    /// Drop a settled result and return to `Idle`.
    pub fn dismiss_result(&mut self) {
        if !self.state.is_submitting() {
            self.state = SubmissionState::Idle;
        }
    }
}
