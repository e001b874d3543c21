use crate::api::client::{HttpSignupApi, SignupApi};
use crate::api::mock::MockSignupApi;
use crate::cli::config::ResolvedSettings;
use crate::form::form_model::{Field, FormSnapshot};
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::SuiteReport;
use crate::scenario::runner::ScenarioRunner;
use crate::scenario::scenario_model::Scenario;
use crate::sign_up;
use crate::submit::controller::SignUpForm;
use crate::submit::error::SignupError;
use crate::submit::submit_model::{SignupUser, SubmissionOutcome};
use crate::trace::logger::TraceLogger;
use crate::view::console::format_console_view;
use crate::view::view_model::SignUpView;

// ============================================================================
// validate subcommand
// ============================================================================

/// Print each field's validation result. Returns whether the form is valid.
pub fn cmd_validate(email: &str, password: &str, username: &str) -> bool {
    let mut snapshot = FormSnapshot::new();
    snapshot.change(Field::Email, email);
    snapshot.change(Field::Password, password);
    snapshot.change(Field::Username, username);

    for field in Field::ALL {
        match &snapshot.field(field).error {
            Some(e) => println!("{}: {}", field.key(), e),
            None => println!("{}: ok", field.key()),
        }
    }

    snapshot.is_valid()
}

// ============================================================================
// submit subcommand
// ============================================================================

/// Fill the form, submit once and print the rendered view.
/// Returns whether the sign-up succeeded.
pub fn cmd_submit(
    settings: &ResolvedSettings,
    email: &str,
    password: &str,
    username: &str,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let api = build_api(settings)?;
    let mut form = SignUpForm::with_tracer(build_tracer(settings)).with_home_route(&settings.home_route);
    let user = SignupUser {
        email: email.to_string(),
        password: password.to_string(),
        username: username.to_string(),
    };

    if verbose > 0 {
        eprintln!("Submitting to {} ({} backend)...", settings.endpoint, settings.backend);
    }

    let succeeded = match sign_up(&mut form, api.as_ref(), &user) {
        Ok(outcome) => matches!(outcome, SubmissionOutcome::Succeeded(_)),
        Err(SignupError::FormInvalid { .. }) => false,
        Err(e) => return Err(e.into()),
    };

    print!("{}", format_console_view(&SignUpView::render(&form)));
    Ok(succeeded)
}

// ============================================================================
// run subcommand
// ============================================================================

/// Run scenarios and return whether all passed.
pub fn cmd_run(
    settings: &ResolvedSettings,
    scenario_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scenarios = load_scenarios(scenario_path)?;

    if scenarios.is_empty() {
        eprintln!("No scenarios found at: {}", scenario_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Running {} scenarios...", scenarios.len());
    }

    let start = std::time::Instant::now();
    let mut results = Vec::new();
    for scenario in &scenarios {
        if verbose > 0 {
            eprintln!("  Running: {}", scenario.name);
        }
        // One backend per scenario; mock request logs are per run.
        let api = build_api(settings)?;
        let form = SignUpForm::with_tracer(build_tracer(settings)).with_home_route(&settings.home_route);
        results.push(ScenarioRunner::run_form(scenario, form, api.as_ref()));
    }

    let report = SuiteReport::from_results("signup", results).with_duration(start.elapsed().as_millis());
    let all_passed = report.all_passed();

    let output_content = match format {
        "junit" => generate_junit_xml(&report),
        _ => format_console_report(&report),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

/// Load scenarios from a single YAML file or a directory of YAML files.
pub fn load_scenarios(path: &str) -> Result<Vec<Scenario>, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        let mut scenarios = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let p = entry?.path();
            if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
                let content = std::fs::read_to_string(&p)?;
                scenarios.push(serde_yaml::from_str::<Scenario>(&content)?);
            }
        }
        scenarios.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(scenarios)
    } else {
        let content = std::fs::read_to_string(path)?;
        Ok(vec![serde_yaml::from_str(&content)?])
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the API backend named in the settings.
pub fn build_api(settings: &ResolvedSettings) -> Result<Box<dyn SignupApi>, SignupError> {
    match settings.backend.as_str() {
        "http" => Ok(Box::new(HttpSignupApi::new(&settings.endpoint)?)),
        "mock" => Ok(Box::new(MockSignupApi::with_success_email(
            &settings.mock_success_email,
        ))),
        other => Err(SignupError::Config(format!(
            "unknown api backend '{}' (expected mock or http)",
            other
        ))),
    }
}

fn build_tracer(settings: &ResolvedSettings) -> TraceLogger {
    match &settings.trace_path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    }
}
