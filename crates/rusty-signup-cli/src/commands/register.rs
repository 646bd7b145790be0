use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use rusty_signup::{FieldName, RegistrationForm, SubmissionState};

use super::GatewayArgs;
use crate::render;

pub async fn execute(gateway: &GatewayArgs) -> Result<()> {
    let gateway = gateway.build()?;
    let mut form = RegistrationForm::new();

    println!("{}", "Cadastro".green().bold());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    for name in FieldName::ALL {
        fill_field(&mut form, name, &mut lines)?;
    }

    println!();
    println!("{}", render::submit_button(&form));
    println!("{}", rusty_signup::SUBMITTING_LABEL.dimmed());
    form.submit(&gateway).await;

    if let Some(line) = render::result_line(&form) {
        println!();
        println!("{}", line);
    }

    if !matches!(form.state(), SubmissionState::Succeeded(_)) {
        anyhow::bail!("Registration was not accepted");
    }

    Ok(())
}

/// Prompt until the field passes its rules.
fn fill_field(form: &mut RegistrationForm, name: FieldName, input: &mut impl BufRead) -> Result<()> {
    loop {
        print!("{}: ", name.placeholder().cyan());
        io::stdout().flush().context("Failed to write prompt")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            anyhow::bail!("Input closed before the form was complete");
        }

        form.change(name, line.trim_end_matches(['\r', '\n']));
        form.blur(name);
        println!("{}", render::field_line(form, name));

        if form.field(name).is_valid {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_valid() {
        let mut form = RegistrationForm::new();
        let mut input = Cursor::new("usernametest.com\nmaria@example.com\n");

        fill_field(&mut form, FieldName::Email, &mut input).unwrap();

        assert_eq!(form.field(FieldName::Email).value, "maria@example.com");
        assert!(form.field(FieldName::Email).is_valid);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut form = RegistrationForm::new();
        let mut input = Cursor::new("");

        assert!(fill_field(&mut form, FieldName::Nome, &mut input).is_err());
    }
}
