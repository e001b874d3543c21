#![allow(dead_code)]

use std::path::PathBuf;

use signup_form::{
    fill_form,
    submit::{controller::SignUpForm, submit_model::SignupUser},
};

pub fn fixture(name: &str) -> PathBuf {
    let base = std::env::current_dir().unwrap();
    base.join("tests").join("fixtures").join(name)
}

pub fn user(email: &str, password: &str, username: &str) -> SignupUser {
    SignupUser {
        email: email.into(),
        password: password.into(),
        username: username.into(),
    }
}

/// The input the mock backend accepts.
pub fn accepted_user() -> SignupUser {
    user("test@gmail.com", "ValidPass123!", "ValidUserName")
}

/// Valid locally, rejected by the mock backend.
pub fn rejected_user() -> SignupUser {
    user("wrong@gmail.com", "Password!", "Username")
}

pub fn filled_form(u: &SignupUser) -> SignUpForm {
    let mut form = SignUpForm::new();
    fill_form(&mut form, u);
    form
}
