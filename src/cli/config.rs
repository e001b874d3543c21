use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_ENDPOINT;
use crate::api::mock::MOCK_SUCCESS_EMAIL;
use crate::submit::submit_model::DEFAULT_HOME_ROUTE;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "signup-form",
    version,
    about = "Headless sign-up form: validate, submit and replay interaction scenarios"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Sign-up endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// API backend: mock or http
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Append JSONL transition traces to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: signup-form.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate field values without submitting
    Validate {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        username: String,
    },

    /// Fill the form and submit it once
    Submit {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        username: String,
    },

    /// Replay interaction scenarios from YAML files
    Run {
        /// Scenario YAML file or directory of YAML files
        #[arg(long)]
        scenario: String,

        /// Output format: console, junit
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `signup-form.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_backend")]
    pub backend: String,

    /// Email the mock backend accepts
    #[serde(default = "default_mock_email")]
    pub mock_success_email: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            backend: default_backend(),
            mock_success_email: default_mock_email(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    /// Route navigated to after a successful sign-up
    #[serde(default = "default_home_route")]
    pub home_route: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            home_route: default_home_route(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_backend() -> String { "mock".to_string() }
fn default_mock_email() -> String { MOCK_SUCCESS_EMAIL.to_string() }
fn default_home_route() -> String { DEFAULT_HOME_ROUTE.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("signup-form.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Settings after applying CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub endpoint: String,
    pub backend: String,
    pub mock_success_email: String,
    pub home_route: String,
    pub trace_path: Option<String>,
}

pub fn resolve_settings(cli: &Cli, config: &AppConfig) -> ResolvedSettings {
    ResolvedSettings {
        endpoint: cli.endpoint.clone().unwrap_or_else(|| config.api.endpoint.clone()),
        backend: cli.api.clone().unwrap_or_else(|| config.api.backend.clone()),
        mock_success_email: config.api.mock_success_email.clone(),
        home_route: config.app.home_route.clone(),
        trace_path: cli.trace.clone().or_else(|| config.trace.path.clone()),
    }
}
