//! Password validation functions

/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Message reported on the confirmation field when it differs from the password
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Senhas não conferem";

pub fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_numeric())
}

/// Anything that is neither a letter, a digit, nor whitespace counts as special
pub fn has_special(password: &str) -> bool {
    password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Requires a strong password.
///
/// Every rule is checked on its own and each failing rule contributes its
/// message, in this order: length, uppercase, lowercase, digit, special
/// character. A blank value therefore reports all five.
///
/// ```
/// use rusty_signup_validation::strong_password;
///
/// let senha = strong_password("Senha");
/// assert_eq!(
///     senha("Teste@1"),
///     vec!["Senha deve ter ao menos 8 caracteres".to_string()]
/// );
/// assert!(senha("S3nh@!123").is_empty());
/// ```
pub fn strong_password(label: impl Into<String>) -> impl Fn(&str) -> Vec<String> + Send + Sync + 'static {
    let label = label.into();
    let rules: [(fn(&str) -> bool, String); 5] = [
        (
            has_min_length,
            format!("{} deve ter ao menos {} caracteres", label, MIN_PASSWORD_LENGTH),
        ),
        (
            has_uppercase,
            format!("{} deve conter pelo menos uma letra maiúscula", label),
        ),
        (
            has_lowercase,
            format!("{} deve conter pelo menos uma letra minúscula", label),
        ),
        (has_digit, format!("{} deve conter pelo menos um número", label)),
        (
            has_special,
            format!("{} deve conter pelo menos um caractere especial", label),
        ),
    ];

    move |value: &str| {
        rules
            .iter()
            .filter(|(passes, _)| !passes(value))
            .map(|(_, message)| message.clone())
            .collect()
    }
}

/// Requires the confirmation to equal the password it refers to.
///
/// The password is an argument, read at validation time, so the rule always
/// compares against the latest password value.
pub fn passwords_match() -> impl Fn(&str, &str) -> Vec<String> + Send + Sync + 'static {
    |confirmation: &str, password: &str| {
        if confirmation == password {
            Vec::new()
        } else {
            vec![PASSWORD_MISMATCH_MESSAGE.to_string()]
        }
    }
}
