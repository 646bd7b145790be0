use anyhow::Result;
use colored::Colorize;
use rusty_signup::{FieldName, RegistrationForm, SubmissionState};

use super::GatewayArgs;
use crate::render;

pub async fn execute(gateway: &GatewayArgs, values: [(FieldName, String); 5]) -> Result<()> {
    let mut form = RegistrationForm::new();
    for (name, value) in values {
        form.change(name, value);
        form.blur(name);
    }

    if !form.is_valid() {
        for name in FieldName::ALL {
            for message in form.errors(name) {
                println!("  {} {}", "✗".red(), message.red());
            }
        }
        anyhow::bail!("Form is invalid, nothing was submitted");
    }

    let gateway = gateway.build()?;
    println!("{}", rusty_signup::SUBMITTING_LABEL.dimmed());
    form.submit(&gateway).await;

    if let Some(line) = render::result_line(&form) {
        println!("{}", line);
    }

    match form.state() {
        SubmissionState::Succeeded(_) => Ok(()),
        _ => anyhow::bail!("Registration was not accepted"),
    }
}
