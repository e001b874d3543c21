use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::form::form_model::Field;

pub const MIN_PASSWORD_LEN: usize = 8;

// Narrower than `^[^@]+@[^@]+\.[^@]+$`: whitespace is rejected as well.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Field-scoped validation failure. Recoverable by editing the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email or password left blank
    Required(Field),

    /// Email does not have a `local@domain.tld` shape
    InvalidFormat,

    /// Password shorter than `min` characters
    TooShort { min: usize },

    /// Username empty or whitespace only
    Empty,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(Field::Email) => write!(f, "Email is required"),
            ValidationError::Required(Field::Password) => write!(f, "Password is required"),
            ValidationError::Required(Field::Username) | ValidationError::Empty => {
                write!(f, "Username is required")
            }
            ValidationError::InvalidFormat => write!(f, "Enter a valid email"),
            ValidationError::TooShort { min } => {
                write!(f, "Password should be of minimum {} characters length", min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(Field::Email));
    }
    if !EMAIL_SHAPE.is_match(value) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(Field::Password));
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
        Field::Username => validate_username(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_messages() {
        assert_eq!(
            validate_email("invalid-email").unwrap_err().to_string(),
            "Enter a valid email"
        );
        assert_eq!(
            validate_email("").unwrap_err().to_string(),
            "Email is required"
        );
    }

    #[test]
    fn password_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        assert!(validate_password("ééééééé").is_err());
        assert!(validate_password("éééééééé").is_ok());
    }
}
