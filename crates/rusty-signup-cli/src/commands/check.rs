use anyhow::Result;
use colored::Colorize;
use rusty_signup::{FieldName, RegistrationForm};

pub fn execute(field: FieldName, value: &str, senha: Option<&str>) -> Result<()> {
    let messages = messages_for(field, value, senha);

    if messages.is_empty() {
        println!("  {} {}", "✓".green(), field.label());
    } else {
        for message in &messages {
            println!("  {} {}", "✗".red(), message.red());
        }
    }

    Ok(())
}

/// Every message the field's rules produce for `value`.
///
/// The confirmation is compared against `senha`, or an empty password.
pub fn messages_for(field: FieldName, value: &str, senha: Option<&str>) -> Vec<String> {
    let mut form = RegistrationForm::new();
    if let Some(senha) = senha {
        form.change(FieldName::Senha, senha);
    }
    form.change(field, value);
    form.blur(field);
    form.errors(field).to_vec()
}
