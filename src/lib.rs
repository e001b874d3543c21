use crate::{
    api::client::SignupApi,
    form::form_model::Field,
    submit::{
        controller::SignUpForm,
        error::SignupError,
        submit_model::{SignupUser, SubmissionOutcome},
    },
};

pub mod api;
pub mod cli;
pub mod form;
pub mod report;
pub mod scenario;
pub mod submit;
pub mod trace;
pub mod view;

/// Type each value into its field and leave it, as a user tabbing through would.
pub fn fill_form(form: &mut SignUpForm, user: &SignupUser) {
    for (field, value) in [
        (Field::Email, &user.email),
        (Field::Password, &user.password),
        (Field::Username, &user.username),
    ] {
        form.change(field, value.as_str());
        form.blur(field);
    }
}

/// Fill the form and submit it once.
pub fn sign_up<'a>(
    form: &'a mut SignUpForm,
    api: &dyn SignupApi,
    user: &SignupUser,
) -> Result<&'a SubmissionOutcome, SignupError> {
    fill_form(form, user);
    form.submit(api)
}
