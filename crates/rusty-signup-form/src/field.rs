//! Field controllers: value, touched flag and derived errors for one input.

use crate::validator::{BoxDependentValidator, BoxValidator, DependentValidator, Validator};

/// What a rendered input binds to.
///
/// `error_message` is only set once the field has been touched, while
/// `is_valid` always reflects the full validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    pub error_message: Option<String>,
    pub is_valid: bool,
}

/// State shared by every field controller.
///
/// `errors` is always the validator's output for the current `value`.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    value: String,
    touched: bool,
    errors: Vec<String>,
}

/// Read access common to [`Field`] and [`DependentField`].
pub trait ValidatedField {
    fn state(&self) -> &FieldState;

    fn value(&self) -> &str {
        &self.state().value
    }

    /// True once the field has been blurred at least once.
    fn is_touched(&self) -> bool {
        self.state().touched
    }

    /// Every message for the current value, touched or not.
    fn errors(&self) -> &[String] {
        &self.state().errors
    }

    fn is_valid(&self) -> bool {
        self.state().errors.is_empty()
    }

    /// First error, but only after the field has been touched.
    fn displayed_error(&self) -> Option<&str> {
        let state = self.state();
        if state.touched {
            state.errors.first().map(String::as_str)
        } else {
            None
        }
    }

    fn view(&self) -> FieldView {
        FieldView {
            value: self.value().to_string(),
            error_message: self.displayed_error().map(str::to_string),
            is_valid: self.is_valid(),
        }
    }
}

/// A field validated by a single [`Validator`].
pub struct Field {
    state: FieldState,
    validator: BoxValidator,
}

impl Field {
    /// Create a pristine field; its empty value is validated immediately so
    /// validity is known before any interaction.
    pub fn new(validator: impl Validator + 'static) -> Self {
        let validator: BoxValidator = Box::new(validator);
        let errors = validator.validate("");
        Self {
            state: FieldState {
                errors,
                ..FieldState::default()
            },
            validator,
        }
    }

    /// Replace the value and re-run the validator, even if the value is unchanged.
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.state.value = value.into();
        self.revalidate();
    }

    /// Mark the field as touched and re-run the validator.
    pub fn on_blur(&mut self) {
        self.state.touched = true;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.state.errors = self.validator.validate(&self.state.value);
    }
}

impl ValidatedField for Field {
    fn state(&self) -> &FieldState {
        &self.state
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("state", &self.state).finish()
    }
}

/// A field whose validity depends on another field's current value.
///
/// The referenced value is supplied on every call; the owner must call
/// [`DependentField::revalidate`] whenever the referenced field changes.
pub struct DependentField {
    state: FieldState,
    validator: BoxDependentValidator,
}

impl DependentField {
    pub fn new(validator: impl DependentValidator + 'static, reference: &str) -> Self {
        let validator: BoxDependentValidator = Box::new(validator);
        let errors = validator.validate("", reference);
        Self {
            state: FieldState {
                errors,
                ..FieldState::default()
            },
            validator,
        }
    }

    pub fn on_change(&mut self, value: impl Into<String>, reference: &str) {
        self.state.value = value.into();
        self.revalidate(reference);
    }

    pub fn on_blur(&mut self, reference: &str) {
        self.state.touched = true;
        self.revalidate(reference);
    }

    /// Re-run the validator against a new reference value; `touched` is untouched.
    pub fn revalidate(&mut self, reference: &str) {
        self.state.errors = self.validator.validate(&self.state.value, reference);
    }
}

impl ValidatedField for DependentField {
    fn state(&self) -> &FieldState {
        &self.state
    }
}

impl std::fmt::Debug for DependentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependentField")
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn not_empty(value: &str) -> Vec<String> {
        if value.is_empty() {
            vec!["empty".to_string(), "second".to_string()]
        } else {
            Vec::new()
        }
    }

    fn same(value: &str, reference: &str) -> Vec<String> {
        if value == reference {
            Vec::new()
        } else {
            vec!["mismatch".to_string()]
        }
    }

    #[test]
    fn test_pristine_field_hides_errors_but_is_invalid() {
        let field = Field::new(not_empty);
        assert!(!field.is_touched());
        assert!(!field.is_valid());
        assert_eq!(field.errors().len(), 2);
        assert_eq!(field.displayed_error(), None);
    }

    #[test]
    fn test_blur_shows_first_error() {
        let mut field = Field::new(not_empty);
        field.on_blur();
        assert!(field.is_touched());
        assert_eq!(field.displayed_error(), Some("empty"));
    }

    #[test]
    fn test_change_does_not_touch() {
        let mut field = Field::new(not_empty);
        field.on_change("x");
        assert!(!field.is_touched());
        assert!(field.is_valid());

        field.on_change("");
        assert!(!field.is_valid());
        assert_eq!(field.displayed_error(), None);
    }

    #[test]
    fn test_double_blur_is_idempotent() {
        let mut field = Field::new(not_empty);
        field.on_blur();
        let errors = field.errors().to_vec();
        field.on_blur();
        assert!(field.is_touched());
        assert_eq!(field.errors(), errors.as_slice());
    }

    #[test]
    fn test_validator_runs_on_every_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut field = Field::new(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            Vec::new()
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        field.on_change("same");
        field.on_change("same");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_view() {
        let mut field = Field::new(not_empty);
        assert_eq!(
            field.view(),
            FieldView {
                value: String::new(),
                error_message: None,
                is_valid: false,
            }
        );

        field.on_blur();
        field.on_change("abc");
        assert_eq!(
            field.view(),
            FieldView {
                value: "abc".to_string(),
                error_message: None,
                is_valid: true,
            }
        );
    }

    #[test]
    fn test_dependent_field_follows_reference() {
        let mut confirmation = DependentField::new(same, "");
        assert!(confirmation.is_valid());

        confirmation.on_change("Teste@123", "Teste@123");
        assert!(confirmation.is_valid());

        // reference changes, confirmation itself is never touched
        confirmation.revalidate("Outra@123");
        assert!(!confirmation.is_touched());
        assert_eq!(confirmation.errors(), ["mismatch".to_string()]);
        assert_eq!(confirmation.displayed_error(), None);

        confirmation.on_blur("Outra@123");
        assert_eq!(confirmation.displayed_error(), Some("mismatch"));
    }
}
