use std::sync::Mutex;

use serde_json::json;

use crate::{
    api::client::{ApiResponse, SignupApi},
    submit::{
        error::SignupError,
        submit_model::{FAILURE_MESSAGE, SignupRequest},
    },
};

pub const MOCK_SUCCESS_EMAIL: &str = "test@gmail.com";

/// In-process stand-in for `POST /api/users`.
///
/// Accepts exactly one email (echoing the user back with 200); every other
/// request gets a 400 with an `errors.email` entry. Requests are recorded in
/// arrival order.
pub struct MockSignupApi {
    pub success_email: String,
    received: Mutex<Vec<SignupRequest>>,
}

impl MockSignupApi {
    pub fn new() -> Self {
        Self::with_success_email(MOCK_SUCCESS_EMAIL)
    }

    pub fn with_success_email(email: &str) -> Self {
        Self {
            success_email: email.to_string(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<SignupRequest> {
        match self.received.lock() {
            Ok(r) => r.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Handle a raw JSON request body the way the HTTP handler would.
    pub fn handle(&self, body: &str) -> ApiResponse {
        let request: SignupRequest = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(_) => return Self::rejected("body"),
        };

        match self.received.lock() {
            Ok(mut r) => r.push(request.clone()),
            Err(poisoned) => poisoned.into_inner().push(request.clone()),
        }

        if request.user.email == self.success_email {
            ApiResponse {
                status: 200,
                headers: vec![
                    ("Access-Control-Allow-Origin".into(), "*".into()),
                    ("Access-Control-Allow-Methods".into(), "POST, OPTIONS".into()),
                    (
                        "Access-Control-Allow-Headers".into(),
                        "Content-Type, Authorization".into(),
                    ),
                ],
                body: json!({ "user": request.user }).to_string(),
            }
        } else {
            Self::rejected("email")
        }
    }

    fn rejected(field: &str) -> ApiResponse {
        let mut errors = serde_json::Map::new();
        errors.insert(field.to_string(), json!([FAILURE_MESSAGE]));

        ApiResponse {
            status: 400,
            headers: vec![("Access-Control-Allow-Origin".into(), "*".into())],
            body: json!({ "errors": errors }).to_string(),
        }
    }
}

impl Default for MockSignupApi {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupApi for MockSignupApi {
    fn post_signup(&self, request: &SignupRequest) -> Result<ApiResponse, SignupError> {
        let body = serde_json::to_string(request).map_err(|source| SignupError::JsonSerialize {
            context: "signup request".into(),
            source,
        })?;
        Ok(self.handle(&body))
    }
}
