use signup_form::form::{
    form_model::{Field, FormSnapshot},
    validator::ValidationError,
};

#[test]
fn fresh_snapshot_is_invalid_and_shows_nothing() {
    let snapshot = FormSnapshot::new();
    assert!(!snapshot.is_valid());
    for field in Field::ALL {
        assert!(snapshot.displayed_error(field).is_none());
        assert!(!snapshot.field(field).touched);
    }
}

#[test]
fn error_hidden_until_blur() {
    let mut snapshot = FormSnapshot::new();
    snapshot.change(Field::Email, "invalid-email");

    assert_eq!(snapshot.email.error, Some(ValidationError::InvalidFormat));
    assert!(snapshot.displayed_error(Field::Email).is_none());

    snapshot.blur(Field::Email);
    assert_eq!(
        snapshot.displayed_error(Field::Email).map(|e| e.to_string()),
        Some("Enter a valid email".to_string())
    );
}

#[test]
fn touch_all_reveals_every_error() {
    let mut snapshot = FormSnapshot::new();
    snapshot.touch_all();
    assert!(snapshot.submit_attempted);
    for field in Field::ALL {
        assert!(snapshot.displayed_error(field).is_some(), "{:?}", field);
    }
}

#[test]
fn valid_when_all_three_fields_pass() {
    let mut snapshot = FormSnapshot::new();
    snapshot.change(Field::Email, "TesT@gmail.com");
    snapshot.change(Field::Password, "LongPassword!");
    assert!(!snapshot.is_valid());
    snapshot.change(Field::Username, "UserName");
    assert!(snapshot.is_valid());
}

#[test]
fn validity_tracks_arbitrary_edit_sequences() {
    let edits: &[(Field, &str)] = &[
        (Field::Email, "a"),
        (Field::Password, "12345678"),
        (Field::Username, "bob"),
        (Field::Email, "a@b.co"),
        (Field::Password, "1234567"),
        (Field::Password, "12345678"),
        (Field::Username, "  "),
        (Field::Username, "bob"),
        (Field::Email, "invalid-email"),
        (Field::Email, "bob@example.com"),
    ];

    let mut snapshot = FormSnapshot::new();
    for (field, value) in edits {
        snapshot.change(*field, *value);

        let expected = Field::ALL
            .iter()
            .all(|f| signup_form::form::validator::validate_field(*f, snapshot.value(*f)).is_ok());
        assert_eq!(snapshot.is_valid(), expected, "after setting {:?}={:?}", field, value);
    }
    assert!(snapshot.is_valid());
}

#[test]
fn change_preserves_touched_flag() {
    let mut snapshot = FormSnapshot::new();
    snapshot.blur(Field::Password);
    snapshot.change(Field::Password, "short");
    assert!(snapshot.password.touched);
    assert!(snapshot.displayed_error(Field::Password).is_some());

    snapshot.change(Field::Password, "long enough");
    assert!(snapshot.displayed_error(Field::Password).is_none());
}

#[test]
fn field_lookup_by_key_or_label() {
    assert_eq!(Field::lookup("email"), Some(Field::Email));
    assert_eq!(Field::lookup("Email Address"), Some(Field::Email));
    assert_eq!(Field::lookup("user name"), Some(Field::Username));
    assert_eq!(Field::lookup("PASSWORD"), Some(Field::Password));
    assert_eq!(Field::lookup("phone"), None);
}
