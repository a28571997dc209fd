// src/application/commands/users/password.rs
use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 12;

/// Admin passwords need length plus a mix of character classes.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let missing: Vec<&str> = [
        (password.chars().any(char::is_uppercase), "an uppercase letter"),
        (password.chars().any(char::is_lowercase), "a lowercase letter"),
        (password.chars().any(|c| c.is_ascii_digit()), "a digit"),
        (password.chars().any(|c| !c.is_alphanumeric()), "a symbol"),
    ]
    .into_iter()
    .filter_map(|(present, label)| (!present).then_some(label))
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "password must contain {}",
            missing.join(", ")
        )))
    }
}
