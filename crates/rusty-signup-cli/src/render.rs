//! Terminal rendering of the form surface

use colored::Colorize;
use rusty_signup::{FieldName, RegistrationForm, ResultTone};

/// One field line: a check mark, or its displayed error in red.
pub fn field_line(form: &RegistrationForm, name: FieldName) -> String {
    match form.field(name).error_message {
        Some(message) => format!("  {} {}", "✗".red(), message.red()),
        None => format!("  {} {}", "✓".green(), name.label()),
    }
}

/// The submit control, dimmed while disabled.
pub fn submit_button(form: &RegistrationForm) -> String {
    let label = format!("[ {} ]", form.button_label());
    if form.is_submit_disabled() {
        label.dimmed().to_string()
    } else {
        label.bold().to_string()
    }
}

/// The result line, if a submission has settled.
pub fn result_line(form: &RegistrationForm) -> Option<String> {
    let message = form.result_message()?;
    let line = match form.result_tone()? {
        ResultTone::Success => message.green().bold(),
        ResultTone::Error => message.red().bold(),
    };
    Some(line.to_string())
}
