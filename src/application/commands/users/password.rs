use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ApplicationError::validation(
            "password must contain uppercase, lowercase, and a digit",
        ));
    }

    Ok(())
}

pub(super) fn ensure_passwords_match(password: &str, confirm: &str) -> ApplicationResult<()> {
    if password == confirm {
        Ok(())
    } else {
        Err(ApplicationError::validation("your passwords do not match"))
    }
}
