use crate::api::client::SignupApi;
use crate::form::form_model::Field;
use crate::scenario::context::ScenarioContext;
use crate::scenario::scenario_model::{
    AssertionResult, AssertionSpec, Scenario, ScenarioResult, ScenarioStep,
};
use crate::submit::controller::SignUpForm;
use crate::submit::error::SignupError;
use crate::submit::submit_model::SUBMIT_LABEL;
use crate::view::view_model::SignUpView;

/// Replays a `Scenario` step by step against a `SignUpForm`.
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Run a scenario against a fresh component.
    pub fn run(scenario: &Scenario, api: &dyn SignupApi) -> ScenarioResult {
        Self::run_form(scenario, SignUpForm::new(), api)
    }

    /// Run a scenario against a caller-configured component.
    pub fn run_form(scenario: &Scenario, mut form: SignUpForm, api: &dyn SignupApi) -> ScenarioResult {
        let mut ctx = ScenarioContext::new();

        for (i, step) in scenario.steps.iter().enumerate() {
            ctx.current_step = i;

            if let Err(e) = Self::execute_step(step, i, &mut form, api, &mut ctx) {
                return ScenarioResult {
                    scenario_name: scenario.name.clone(),
                    passed: false,
                    steps_run: i + 1,
                    assertion_results: ctx.assertion_results,
                    error: Some(format!("Step {} failed: {}", i, e)),
                };
            }
        }

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed: ctx.all_passed(),
            steps_run: scenario.steps.len(),
            assertion_results: ctx.assertion_results,
            error: None,
        }
    }

    fn execute_step(
        step: &ScenarioStep,
        step_index: usize,
        form: &mut SignUpForm,
        api: &dyn SignupApi,
        ctx: &mut ScenarioContext,
    ) -> Result<(), SignupError> {
        match step {
            ScenarioStep::Change { field, value } => {
                let field = Self::resolve_field(field)?;
                form.change(field, value.clone());
                Ok(())
            }

            ScenarioStep::Blur { field } => {
                let field = Self::resolve_field(field)?;
                form.blur(field);
                Ok(())
            }

            ScenarioStep::Click { label } => {
                if !label.trim().eq_ignore_ascii_case(SUBMIT_LABEL) || !form.submit_present() {
                    return Err(SignupError::ElementNotFound {
                        element: label.clone(),
                        context: "no button with this label is rendered".into(),
                    });
                }
                // Disabled controls swallow the click.
                if form.submit_enabled() {
                    form.submit(api)?;
                }
                Ok(())
            }

            ScenarioStep::Unmount => {
                form.unmount();
                Ok(())
            }

            ScenarioStep::Assert { assertions } => {
                let view = SignUpView::render(form);
                let results = assertions
                    .iter()
                    .map(|spec| Self::evaluate_one(spec, step_index, &view))
                    .collect();
                ctx.record_assertions(results);
                Ok(())
            }
        }
    }

    fn resolve_field(name: &str) -> Result<Field, SignupError> {
        Field::lookup(name).ok_or_else(|| SignupError::ElementNotFound {
            element: name.to_string(),
            context: "expected one of email, password, username".into(),
        })
    }

    fn evaluate_one(spec: &AssertionSpec, step_index: usize, view: &SignUpView) -> AssertionResult {
        let result = |passed: bool, actual: Option<String>, failure: String| AssertionResult {
            step_index,
            spec: spec.clone(),
            passed,
            actual,
            message: if passed { None } else { Some(failure) },
        };

        let button_state = view.submit.as_ref().map(|b| {
            if b.enabled { "enabled" } else { "disabled" }
        });

        match spec {
            AssertionSpec::TextPresent { expected } => {
                let text = view.visible_text().to_lowercase();
                result(
                    text.contains(&expected.to_lowercase()),
                    Some(format!("(view text, {} chars)", text.len())),
                    format!("Text '{}' not found in view", expected),
                )
            }

            AssertionSpec::TextAbsent { expected } => {
                let text = view.visible_text().to_lowercase();
                result(
                    !text.contains(&expected.to_lowercase()),
                    Some(format!("(view text, {} chars)", text.len())),
                    format!("Text '{}' was found in view but should be absent", expected),
                )
            }

            AssertionSpec::ButtonEnabled => result(
                button_state == Some("enabled"),
                Some(button_state.unwrap_or("absent").to_string()),
                "Sign Up button is not enabled".into(),
            ),

            AssertionSpec::ButtonDisabled => result(
                button_state == Some("disabled"),
                Some(button_state.unwrap_or("absent").to_string()),
                "Sign Up button is not disabled".into(),
            ),

            AssertionSpec::ButtonAbsent => result(
                button_state.is_none(),
                Some(button_state.unwrap_or("absent").to_string()),
                "Sign Up button is still rendered".into(),
            ),

            AssertionSpec::FieldValue { field, expected } => {
                match Field::lookup(field).and_then(|f| view.field(f)) {
                    Some(fv) => result(
                        fv.value == *expected,
                        Some(fv.value.clone()),
                        format!("Field '{}' holds '{}', expected '{}'", field, fv.value, expected),
                    ),
                    None => result(false, None, format!("Field '{}' not found", field)),
                }
            }

            AssertionSpec::FieldError { field, expected } => {
                match Field::lookup(field).and_then(|f| view.field(f)) {
                    Some(fv) => {
                        let passed = match (expected, &fv.error) {
                            (None, None) => true,
                            (Some(want), Some(got)) => got.to_lowercase().contains(&want.to_lowercase()),
                            _ => false,
                        };
                        result(
                            passed,
                            fv.error.clone(),
                            match expected {
                                Some(want) => format!("Field '{}' does not show error '{}'", field, want),
                                None => format!("Field '{}' shows an unexpected error", field),
                            },
                        )
                    }
                    None => result(false, None, format!("Field '{}' not found", field)),
                }
            }

            AssertionSpec::NavigatedTo { expected } => result(
                view.navigate_to.as_deref() == Some(expected.as_str()),
                view.navigate_to.clone(),
                format!("Did not navigate to '{}'", expected),
            ),
        }
    }
}
