//! E-mail validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::{is_filled, required_message};

/// Message for a value that is not shaped like an e-mail address
pub const INVALID_EMAIL_MESSAGE: &str = "Formato de e-mail inválido";

// local@label.label[.label...] with no whitespace and a single '@'
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("e-mail pattern is valid")
});

/// Validates basic e-mail format
///
/// Checks for:
/// - Exactly one '@' symbol
/// - A non-empty local part before it
/// - A domain with at least a second-level and a top-level label
/// - No whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Requires a filled, well-formed e-mail address.
///
/// A blank value reports the label's "must be filled" message; anything else
/// that fails the shape check reports [`INVALID_EMAIL_MESSAGE`].
pub fn valid_email(label: impl Into<String>) -> impl Fn(&str) -> Vec<String> + Send + Sync + 'static {
    let required = required_message(&label.into());
    move |value: &str| {
        if !is_filled(value) {
            vec![required.clone()]
        } else if !is_valid_email(value) {
            vec![INVALID_EMAIL_MESSAGE.to_string()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("Maria_Silva@dominio-teste.com.br")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case::missing_username("@test.com")]
    #[case::missing_top_level_domain("username@test")]
    #[case::missing_second_level_domain("username@.com")]
    #[case::missing_at("usernametest.com")]
    #[case::two_ats("user@name@test.com")]
    #[case::whitespace("user name@test.com")]
    #[case::trailing_dot("user@test.com.")]
    #[case::empty("")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }

    #[test]
    fn test_valid_email_rule_messages() {
        let rule = valid_email("E-mail");
        assert_eq!(rule(""), vec!["E-mail deve ser preenchido".to_string()]);
        assert_eq!(rule("usernametest.com"), vec![INVALID_EMAIL_MESSAGE.to_string()]);
        assert!(rule("username@test.com").is_empty());
    }
}
