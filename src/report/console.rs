use crate::report::report_model::SuiteReport;

/// Format a suite report for terminal output.
///
/// ```text
/// === Scenarios: signup ===
///
/// ✓ PASS  successful sign-up (6 steps, 2 assertions)
/// ✗ FAIL  rejected sign-up (6 steps, 1 assertions)
///     [FAIL] Step 5: TextPresent — Text 'Error Signing Up!' not found in view
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_console_report(report: &SuiteReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Scenarios: {} ===\n\n", report.suite_name));

    for result in &report.results {
        let marker = if result.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} ({} steps, {} assertions)\n",
            marker,
            result.scenario_name,
            result.steps_run,
            result.assertion_results.len()
        ));

        if let Some(ref error) = result.error {
            out.push_str(&format!("    [ERROR] {}\n", error));
        }

        for ar in result.assertion_results.iter().filter(|ar| !ar.passed) {
            let detail = ar.message.as_deref().unwrap_or("assertion failed");
            out.push_str(&format!(
                "    [FAIL] Step {}: {} — {}\n",
                ar.step_index,
                ar.spec.type_name(),
                detail
            ));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total)",
        report.passed, report.failed, report.total
    ));

    if let Some(ms) = report.duration_ms {
        out.push_str(&format!(" in {:.1}s", ms as f64 / 1000.0));
    }

    out.push_str(" ===\n");
    out
}
