use signup_form::report::console::format_console_report;
use signup_form::report::junit::{escape_xml, generate_junit_xml};
use signup_form::report::report_model::SuiteReport;
use signup_form::scenario::scenario_model::{AssertionResult, AssertionSpec, ScenarioResult};

// ============================================================================
// Helper builders
// ============================================================================

fn passing_result(name: &str) -> ScenarioResult {
    ScenarioResult {
        scenario_name: name.to_string(),
        passed: true,
        steps_run: 5,
        assertion_results: vec![AssertionResult {
            step_index: 4,
            spec: AssertionSpec::ButtonAbsent,
            passed: true,
            actual: Some("absent".into()),
            message: None,
        }],
        error: None,
    }
}

fn failing_result(name: &str) -> ScenarioResult {
    ScenarioResult {
        scenario_name: name.to_string(),
        passed: false,
        steps_run: 5,
        assertion_results: vec![AssertionResult {
            step_index: 4,
            spec: AssertionSpec::TextPresent {
                expected: "Error Signing Up!".into(),
            },
            passed: false,
            actual: Some("(view text, 40 chars)".into()),
            message: Some("Text 'Error Signing Up!' not found in view".into()),
        }],
        error: None,
    }
}

fn erroring_result(name: &str) -> ScenarioResult {
    ScenarioResult {
        scenario_name: name.to_string(),
        passed: false,
        steps_run: 1,
        assertion_results: vec![],
        error: Some("Step 0 failed: Element 'phone' not found".into()),
    }
}

fn mixed_report() -> SuiteReport {
    SuiteReport::from_results(
        "signup",
        vec![
            passing_result("success <redirect>"),
            failing_result("rejected"),
            erroring_result("bad field"),
        ],
    )
}

// ============================================================================
// SuiteReport
// ============================================================================

#[test]
fn report_counts() {
    let report = mixed_report();
    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 2);
    assert!(!report.all_passed());
    assert!(report.duration_ms.is_none());

    let empty = SuiteReport::from_results("empty", vec![]);
    assert!(empty.all_passed());
}

// ============================================================================
// Console
// ============================================================================

#[test]
fn console_lists_failures_and_summary() {
    let out = format_console_report(&mixed_report().with_duration(1500));

    assert!(out.starts_with("=== Scenarios: signup ===\n"));
    assert!(out.contains("\u{2713} PASS  success <redirect> (5 steps, 1 assertions)"));
    assert!(out.contains("\u{2717} FAIL  rejected"));
    assert!(out.contains("[FAIL] Step 4: TextPresent — Text 'Error Signing Up!' not found in view"));
    assert!(out.contains("[ERROR] Step 0 failed: Element 'phone' not found"));
    assert!(out.contains("=== Results: 1 passed, 2 failed (3 total) in 1.5s ==="));
}

// ============================================================================
// JUnit
// ============================================================================

#[test]
fn junit_structure() {
    let xml = generate_junit_xml(&mixed_report().with_duration(2000));

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<testsuite name=\"signup\" tests=\"3\" failures=\"2\" time=\"2.000\">"));
    assert!(xml.contains("<testcase name=\"success &lt;redirect&gt;\" classname=\"signup-form\" />"));
    assert!(xml.contains("<failure message=\"1 assertion(s) failed\""));
    assert!(xml.contains("<failure message=\"execution error\""));
    assert!(xml.contains("Step 4: Text &apos;Error Signing Up!&apos; not found in view"));
    assert!(xml.trim_end().ends_with("</testsuite>"));
}

#[test]
fn escape_xml_special_chars() {
    assert_eq!(escape_xml(r#"a&b<c>"d"'e'"#), "a&amp;b&lt;c&gt;&quot;d&quot;&apos;e&apos;");
}
