//! # rusty-signup-form
//!
//! The validated-field engine behind the rusty-signup registration form.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_signup_form::{FieldName, RegistrationForm};
//!
//! let mut form = RegistrationForm::new();
//!
//! form.change(FieldName::Email, "maria@example.com");
//! form.blur(FieldName::Email);
//!
//! if form.can_submit() {
//!     form.submit(&gateway).await;
//!     println!("{}", form.result_message().unwrap_or_default());
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`validator`** - the `Validator` contract (`&str -> Vec<String>`) and composition helpers
//! - **`field`** - `Field` and `DependentField` controllers with the touched/display split
//! - **`submission`** - `SubmissionState`, `SubmissionGateway` and `SubmissionError`
//! - **`registration`** - `RegistrationForm`, which aggregates the five fields and drives submission

pub mod field;
pub mod registration;
pub mod submission;
pub mod validator;

pub use field::{DependentField, Field, FieldState, FieldView, ValidatedField};
pub use registration::{
    FieldName, RegistrationForm, RegistrationPayload, UnknownField, SUBMITTING_LABEL, SUBMIT_LABEL,
};
pub use submission::{
    normalize_remote_message, BoxError, ResultTone, SubmissionError, SubmissionGateway,
    SubmissionState, GENERIC_FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use validator::{
    all_of, AllOf, BoxDependentValidator, BoxValidator, DependentValidator, Rules, Validator,
};

// Re-exported so gateway implementors don't need their own dependency
pub use async_trait::async_trait;
