use std::collections::BTreeMap;

use serde::Deserialize;

use crate::submit::{
    error::SignupError,
    submit_model::{FAILURE_MESSAGE, SignupRequest, SignupUser},
};

pub const DEFAULT_ENDPOINT: &str = "https://api.realworld.io/api/users";

/// Raw HTTP response as seen by the component.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The one remote collaborator: `POST /api/users`.
pub trait SignupApi {
    fn post_signup(&self, request: &SignupRequest) -> Result<ApiResponse, SignupError>;
}

#[derive(Deserialize)]
struct SuccessBody {
    user: SignupUser,
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: BTreeMap<String, Vec<String>>,
}

/// Map a response onto the user it created, or the message to surface.
///
/// A 2xx whose body does not echo a user still counts as success; the
/// submitted user is reported instead. Error bodies surface the first message
/// of the first field (keys in sorted order), always prefixed by the generic
/// failure headline unless the message already is that headline.
pub fn interpret_response(response: &ApiResponse, request: &SignupRequest) -> Result<SignupUser, String> {
    if response.is_success() {
        let user = serde_json::from_str::<SuccessBody>(&response.body)
            .map(|b| b.user)
            .unwrap_or_else(|_| request.user.clone());
        return Ok(user);
    }

    let detail = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|b| {
            b.errors
                .into_iter()
                .find_map(|(field, messages)| messages.into_iter().next().map(|m| (field, m)))
        });

    match detail {
        Some((_, message)) if message == FAILURE_MESSAGE => Err(message),
        Some((field, message)) => Err(format!("{} {} {}", FAILURE_MESSAGE, field, message)),
        None => Err(FAILURE_MESSAGE.to_string()),
    }
}

// ============================================================================
// HTTP backend
// ============================================================================

pub struct HttpSignupApi {
    pub endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpSignupApi {
    pub fn new(endpoint: &str) -> Result<Self, SignupError> {
        let url = reqwest::Url::parse(endpoint)
            .map_err(|e| SignupError::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SignupError::Config(format!(
                "endpoint '{}' must use http or https",
                endpoint
            )));
        }

        Ok(Self {
            endpoint: endpoint.to_string(),
            client: reqwest::blocking::Client::new(),
        })
    }

    fn transport(&self, source: reqwest::Error) -> SignupError {
        SignupError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl Default for HttpSignupApi {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SignupApi for HttpSignupApi {
    fn post_signup(&self, request: &SignupRequest) -> Result<ApiResponse, SignupError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| self.transport(e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().map_err(|e| self.transport(e))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
