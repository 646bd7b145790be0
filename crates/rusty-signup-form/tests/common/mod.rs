//! Shared helpers for registration form tests

#![allow(dead_code)]

use std::sync::Mutex;

use rusty_signup_form::{
    async_trait, FieldName, RegistrationForm, RegistrationPayload, SubmissionError,
    SubmissionGateway,
};

pub const STRONG_PASSWORD: &str = "S3nh@!123";

/// Change (when `value` is given), blur, then expect `message` on screen.
pub fn assert_error_shown(
    form: &mut RegistrationForm,
    field: FieldName,
    message: &str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        form.change(field, value);
    }
    form.blur(field);
    assert!(
        form.errors(field).iter().any(|m| m == message),
        "expected '{}' on {} but got {:?}",
        message,
        field,
        form.errors(field)
    );
    assert!(form.field(field).error_message.is_some());
}

/// Change and blur, then expect `message` to be gone.
pub fn assert_error_not_shown(
    form: &mut RegistrationForm,
    field: FieldName,
    value: &str,
    message: &str,
) {
    form.change(field, value);
    form.blur(field);
    assert!(
        form.errors(field).iter().all(|m| m != message),
        "did not expect '{}' on {} for {:?}",
        message,
        field,
        value
    );
}

/// Fill every field with valid data.
pub fn fill_valid(form: &mut RegistrationForm) -> RegistrationPayload {
    let payload = RegistrationPayload {
        nome: "Maria".to_string(),
        email: "maria.silva@example.com".to_string(),
        senha: STRONG_PASSWORD.to_string(),
        codigo_acesso: "Lorem ipsum dolor sit amet".to_string(),
    };
    form.change(FieldName::Nome, payload.nome.clone());
    form.change(FieldName::Email, payload.email.clone());
    form.change(FieldName::Senha, payload.senha.clone());
    form.change(FieldName::ConfirmacaoSenha, payload.senha.clone());
    form.change(FieldName::CodigoAcesso, payload.codigo_acesso.clone());
    payload
}

/// What the fake gateway answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Accept,
    Remote(u16, &'static str),
    Network,
    Unexpected,
    Panic,
}

/// In-memory gateway that records every payload it receives.
pub struct FakeGateway {
    reply: Reply,
    pub received: Mutex<Vec<RegistrationPayload>>,
}

impl FakeGateway {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<RegistrationPayload> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionGateway for FakeGateway {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), SubmissionError> {
        self.received.lock().unwrap().push(payload.clone());
        match &self.reply {
            Reply::Accept => Ok(()),
            Reply::Remote(status, message) => Err(SubmissionError::remote(*status, *message)),
            Reply::Network => Err(SubmissionError::network("connection refused")),
            Reply::Unexpected => Err(SubmissionError::UnexpectedResponse {
                status: 400,
                body: Some(r#"{"statusCode":400}"#.to_string()),
            }),
            Reply::Panic => panic!("gateway exploded"),
        }
    }
}
