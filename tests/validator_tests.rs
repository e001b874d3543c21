use signup_form::form::{
    form_model::Field,
    validator::{
        MIN_PASSWORD_LEN, ValidationError, validate_email, validate_field, validate_password,
        validate_username,
    },
};

// =========================================================================
// Email
// =========================================================================

#[test]
fn email_accepts_standard_shapes() {
    for email in [
        "test@gmail.com",
        "TesT@gmail.com",
        "first.last@sub.example.co.uk",
        "a+tag@b.io",
    ] {
        assert!(validate_email(email).is_ok(), "{} should be valid", email);
    }
}

#[test]
fn email_rejects_everything_outside_basic_shape() {
    // None of these match ^[^@]+@[^@]+\.[^@]+$
    for email in [
        "invalid-email",
        "@gmail.com",
        "user@",
        "user@domain",
        "user@@domain.com",
        "user@domain.",
        "a@b@c.com",
        "plainaddress",
        ".@",
    ] {
        assert_eq!(
            validate_email(email),
            Err(ValidationError::InvalidFormat),
            "{} should be rejected",
            email
        );
    }
}

#[test]
fn email_rejects_whitespace() {
    assert!(validate_email("user @gmail.com").is_err());
    assert!(validate_email(" user@gmail.com").is_err());
}

#[test]
fn email_required_when_empty() {
    assert_eq!(validate_email(""), Err(ValidationError::Required(Field::Email)));
}

// =========================================================================
// Password
// =========================================================================

#[test]
fn password_shorter_than_minimum_fails() {
    for len in 1..MIN_PASSWORD_LEN {
        let pw = "x".repeat(len);
        assert_eq!(
            validate_password(&pw),
            Err(ValidationError::TooShort { min: 8 }),
            "length {}",
            len
        );
    }
}

#[test]
fn password_at_or_above_minimum_passes() {
    for pw in ["12345678", "Password!", "LongPassword!", "ValidPass123!"] {
        assert!(validate_password(pw).is_ok(), "{} should be valid", pw);
    }
}

#[test]
fn password_message_matches_form_text() {
    let err = validate_password("short").unwrap_err();
    assert_eq!(err.to_string(), "Password should be of minimum 8 characters length");
    assert_eq!(
        validate_password("").unwrap_err().to_string(),
        "Password is required"
    );
}

// =========================================================================
// Username
// =========================================================================

#[test]
fn username_rejects_empty_and_whitespace() {
    assert_eq!(validate_username(""), Err(ValidationError::Empty));
    assert_eq!(validate_username("   \t"), Err(ValidationError::Empty));
    assert!(validate_username("ValidUserName").is_ok());
}

#[test]
fn validate_field_dispatches() {
    assert!(validate_field(Field::Email, "invalid-email").is_err());
    assert!(validate_field(Field::Password, "short").is_err());
    assert!(validate_field(Field::Username, "").is_err());
    assert!(validate_field(Field::Email, "test@gmail.com").is_ok());
}
