use serde::Serialize;

use crate::{
    form::form_model::Field,
    submit::{
        controller::SignUpForm,
        submit_model::{SUBMIT_LABEL, SUCCESS_MESSAGE, SubmissionOutcome},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: String,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// Everything the component renders at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpView {
    pub fields: Vec<FieldView>,

    /// `None` once the component has navigated away.
    pub submit: Option<ButtonView>,
    pub banner: Option<Banner>,
    pub navigate_to: Option<String>,
}

impl SignUpView {
    pub fn render(form: &SignUpForm) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label().to_string(),
                value: form.snapshot.value(field).to_string(),
                error: form.snapshot.displayed_error(field).map(|e| e.to_string()),
            })
            .collect();

        let submit = form.submit_present().then(|| ButtonView {
            label: SUBMIT_LABEL.to_string(),
            enabled: form.submit_enabled(),
        });

        let banner = match &form.outcome {
            SubmissionOutcome::Succeeded(_) => Some(Banner {
                kind: BannerKind::Success,
                text: SUCCESS_MESSAGE.to_string(),
            }),
            SubmissionOutcome::Failed(message) => Some(Banner {
                kind: BannerKind::Error,
                text: message.clone(),
            }),
            SubmissionOutcome::Idle | SubmissionOutcome::Pending => None,
        };

        Self {
            fields,
            submit,
            banner,
            navigate_to: form.navigate_to.clone(),
        }
    }

    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// All visible strings, labels and button included. Password values are
    /// not visible text.
    pub fn visible_text(&self) -> String {
        let mut texts = Vec::new();
        for f in &self.fields {
            texts.push(f.label.clone());
            if f.field != Field::Password && !f.value.is_empty() {
                texts.push(f.value.clone());
            }
            if let Some(error) = &f.error {
                texts.push(error.clone());
            }
        }
        if let Some(button) = &self.submit {
            texts.push(button.label.clone());
        }
        if let Some(banner) = &self.banner {
            texts.push(banner.text.clone());
        }
        texts.join("\n")
    }
}
