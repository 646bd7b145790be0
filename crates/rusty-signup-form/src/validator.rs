//! Validator contract and composition helpers.

/// A pure rule mapping a value to its ordered error messages.
///
/// An empty vector means the value is valid. Any
/// `Fn(&str) -> Vec<String> + Send + Sync` closure is a validator, so the
/// rule builders from `rusty-signup-validation` can be passed directly.
pub trait Validator: Send + Sync {
    fn validate(&self, value: &str) -> Vec<String>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn validate(&self, value: &str) -> Vec<String> {
        self(value)
    }
}

/// A validator that also needs the current value of another field.
///
/// The referenced value is passed in on every call rather than captured,
/// so callers decide explicitly when the dependency is re-read.
pub trait DependentValidator: Send + Sync {
    fn validate(&self, value: &str, reference: &str) -> Vec<String>;
}

impl<F> DependentValidator for F
where
    F: Fn(&str, &str) -> Vec<String> + Send + Sync,
{
    fn validate(&self, value: &str, reference: &str) -> Vec<String> {
        self(value, reference)
    }
}

/// Boxed validator held by a field.
pub type BoxValidator = Box<dyn Validator>;

/// Boxed dependent validator held by a dependent field.
pub type BoxDependentValidator = Box<dyn DependentValidator>;

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Ordered list of predicate rules.
///
/// Every failing rule contributes its message; rules never short-circuit.
///
/// ```
/// use rusty_signup_form::{Rules, Validator};
///
/// let rules = Rules::new()
///     .rule(|v| !v.is_empty(), "required")
///     .rule(|v| v.len() <= 3, "too long");
///
/// assert_eq!(rules.validate(""), vec!["required".to_string()]);
/// assert_eq!(rules.validate("abcd"), vec!["too long".to_string()]);
/// ```
#[derive(Default)]
pub struct Rules {
    rules: Vec<(Predicate, String)>,
}

impl Rules {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule that passes when `f` returns true.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push((Box::new(f), msg.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Validator for Rules {
    fn validate(&self, value: &str) -> Vec<String> {
        self.rules
            .iter()
            .filter(|(passes, _)| !passes(value))
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

/// Concatenation of several validators, in order.
pub struct AllOf {
    validators: Vec<BoxValidator>,
}

impl Validator for AllOf {
    fn validate(&self, value: &str) -> Vec<String> {
        self.validators
            .iter()
            .flat_map(|v| v.validate(value))
            .collect()
    }
}

/// Run every validator and keep all of their messages in order.
pub fn all_of(validators: Vec<BoxValidator>) -> AllOf {
    AllOf { validators }
}
