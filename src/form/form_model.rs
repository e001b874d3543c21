use serde::{Deserialize, Serialize};

use crate::form::validator::{ValidationError, validate_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
    Username,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::Username];

    /// JSON key used in the request body and in API error maps.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Username => "username",
        }
    }

    /// Label rendered next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::Username => "User Name",
        }
    }

    /// Resolve a field from its key or its label (case-insensitive).
    pub fn lookup(name: &str) -> Option<Field> {
        let needle = name.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|f| f.key() == needle || f.label().to_lowercase() == needle)
    }
}

/// One input's value and validity state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub value: String,
    pub error: Option<ValidationError>,
    pub touched: bool,
}

impl FormField {
    fn new(field: Field) -> Self {
        Self {
            value: String::new(),
            error: validate_field(field, "").err(),
            touched: false,
        }
    }
}

/// All three fields of the sign-up form.
///
/// Validity is always derived from the current values; the only other state
/// is the per-field `touched` flag and whether a submit was attempted, both of
/// which affect error *display* and never validity.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub email: FormField,
    pub password: FormField,
    pub username: FormField,
    pub submit_attempted: bool,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self {
            email: FormField::new(Field::Email),
            password: FormField::new(Field::Password),
            username: FormField::new(Field::Username),
            submit_attempted: false,
        }
    }

    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Username => &self.username,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Username => &mut self.username,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let slot = self.field_mut(field);
        slot.value = value.into();
        slot.error = validate_field(field, &slot.value).err();
    }

    pub fn blur(&mut self, field: Field) {
        let slot = self.field_mut(field);
        slot.touched = true;
        slot.error = validate_field(field, &slot.value).err();
    }

    pub fn touch_all(&mut self) {
        self.submit_attempted = true;
        for field in Field::ALL {
            self.blur(field);
        }
    }

    /// Error to show for a field, if it has been touched or a submit was tried.
    pub fn displayed_error(&self, field: Field) -> Option<&ValidationError> {
        let slot = self.field(field);
        if slot.touched || self.submit_attempted {
            slot.error.as_ref()
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).error.is_none())
            && !self.username.value.trim().is_empty()
    }
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
