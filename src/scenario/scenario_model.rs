use serde::{Deserialize, Serialize};

/// A scripted interaction with the sign-up form, replayed against a fresh
/// component. Usually deserialized from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Human-readable name for this scenario
    pub name: String,

    /// Ordered list of steps to execute
    pub steps: Vec<ScenarioStep>,
}

/// A single user event or check.
///
/// `field` accepts either the JSON key (`email`) or the rendered label
/// (`Email Address`), case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Type a new value into a field
    Change { field: String, value: String },

    /// Leave a field
    Blur { field: String },

    /// Activate a button by label. Clicking a disabled button does nothing.
    Click { label: String },

    /// Tear the component down
    Unmount,

    /// Check the rendered view
    Assert { assertions: Vec<AssertionSpec> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssertionSpec {
    /// Visible text contains the expected string (case-insensitive)
    TextPresent { expected: String },

    /// Visible text does not contain the expected string
    TextAbsent { expected: String },

    /// Submit control present and enabled
    ButtonEnabled,

    /// Submit control present and disabled
    ButtonDisabled,

    /// Submit control removed
    ButtonAbsent,

    /// Field currently holds exactly this value
    FieldValue { field: String, expected: String },

    /// Field shows this error, or none when `expected` is omitted
    FieldError {
        field: String,
        #[serde(default)]
        expected: Option<String>,
    },

    /// Component navigated to this route
    NavigatedTo { expected: String },
}

impl AssertionSpec {
    pub fn type_name(&self) -> &'static str {
        match self {
            AssertionSpec::TextPresent { .. } => "TextPresent",
            AssertionSpec::TextAbsent { .. } => "TextAbsent",
            AssertionSpec::ButtonEnabled => "ButtonEnabled",
            AssertionSpec::ButtonDisabled => "ButtonDisabled",
            AssertionSpec::ButtonAbsent => "ButtonAbsent",
            AssertionSpec::FieldValue { .. } => "FieldValue",
            AssertionSpec::FieldError { .. } => "FieldError",
            AssertionSpec::NavigatedTo { .. } => "NavigatedTo",
        }
    }
}

/// Result of evaluating a single assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssertionResult {
    /// Which step this assertion belongs to (0-indexed)
    pub step_index: usize,

    pub spec: AssertionSpec,
    pub passed: bool,

    /// Actual value found (for debugging failed assertions)
    pub actual: Option<String>,

    /// Human-readable failure message
    pub message: Option<String>,
}

/// Result of running a complete scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,

    /// Whether all steps and assertions passed
    pub passed: bool,

    pub steps_run: usize,
    pub assertion_results: Vec<AssertionResult>,

    /// Error that stopped the scenario (not an assertion failure)
    pub error: Option<String>,
}
