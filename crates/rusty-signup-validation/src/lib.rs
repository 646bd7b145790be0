//! rusty-signup validation rules
//!
//! Pure rule functions for the registration form fields. Every rule builder
//! takes the field label and returns a closure `Fn(&str) -> Vec<String>`:
//! the ordered list of messages for a value, empty when the value passes.
//!
//! The closures plug straight into `rusty-signup-form` as validators, and the
//! plain predicates (`is_valid_email`, `has_uppercase`, ...) are exported for
//! callers that only need a yes/no answer.

pub mod email;
pub mod password;
pub mod string;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use string::*;
