//! Presence validation

/// Message used when a required field is blank.
pub fn required_message(label: &str) -> String {
    format!("{} deve ser preenchido", label)
}

/// True when the value has something other than whitespace
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Requires a non-blank value.
///
/// ```
/// use rusty_signup_validation::required;
///
/// let nome = required("Nome");
/// assert_eq!(nome(""), vec!["Nome deve ser preenchido".to_string()]);
/// assert!(nome("Maria").is_empty());
/// ```
pub fn required(label: impl Into<String>) -> impl Fn(&str) -> Vec<String> + Send + Sync + 'static {
    let message = required_message(&label.into());
    move |value: &str| {
        if is_filled(value) {
            Vec::new()
        } else {
            vec![message.clone()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_filled() {
        assert!(is_filled("a"));
        assert!(is_filled("  a "));
        assert!(!is_filled(""));
        assert!(!is_filled("   "));
        assert!(!is_filled("\t\n"));
    }

    #[test]
    fn test_required_uses_label() {
        let rule = required("Codigo Acesso");
        assert_eq!(rule(" "), vec!["Codigo Acesso deve ser preenchido".to_string()]);
        assert!(rule("abc").is_empty());
    }
}
