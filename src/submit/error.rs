use std::fmt;

use crate::form::form_model::Field;

#[derive(Debug)]
pub enum SignupError {
    /// HTTP request could not be sent or its body could not be read
    Transport { endpoint: String, source: reqwest::Error },

    /// Response body was not the expected JSON
    JsonParse { context: String, source: serde_json::Error },

    /// Request body could not be encoded
    JsonSerialize { context: String, source: serde_json::Error },

    /// Submit attempted while one or more fields fail validation
    FormInvalid { fields: Vec<Field> },

    /// A request is already in flight
    AlreadyPending,

    /// The component navigated away or was torn down
    NotMounted,

    /// Bad endpoint or backend selection
    Config(String),

    /// A scenario step named a field or control the form does not have
    ElementNotFound { element: String, context: String },
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupError::Transport { endpoint, source } => {
                write!(f, "Request to {} failed: {}", endpoint, source)
            }
            SignupError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            SignupError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            SignupError::FormInvalid { fields } => {
                let keys: Vec<_> = fields.iter().map(|f| f.key()).collect();
                write!(f, "Form has invalid fields: {}", keys.join(", "))
            }
            SignupError::AlreadyPending => write!(f, "A sign-up request is already pending"),
            SignupError::NotMounted => write!(f, "Sign-up form is no longer mounted"),
            SignupError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SignupError::ElementNotFound { element, context } => {
                write!(f, "Element '{}' not found: {}", element, context)
            }
        }
    }
}

impl std::error::Error for SignupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SignupError::Transport { source, .. } => Some(source),
            SignupError::JsonParse { source, .. } => Some(source),
            SignupError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
