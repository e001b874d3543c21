use serde::{Deserialize, Serialize};

use crate::form::form_model::{Field, FormSnapshot};

pub const SUCCESS_MESSAGE: &str = "Sign Up Successfully!";
pub const FAILURE_MESSAGE: &str = "Error Signing Up!";
pub const SUBMIT_LABEL: &str = "Sign Up";
pub const DEFAULT_HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupUser {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// Body of `POST /api/users`: `{"user": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub user: SignupUser,
}

impl SignupRequest {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            user: SignupUser {
                email: snapshot.value(Field::Email).to_string(),
                password: snapshot.value(Field::Password).to_string(),
                username: snapshot.value(Field::Username).to_string(),
            },
        }
    }

    /// Stable sha1 digest of the request; equal inputs give equal digests.
    /// Traces record this instead of the body so the password never lands on disk.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        for part in [&self.user.email, &self.user.password, &self.user.username] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Idle,
    Pending,
    Succeeded(SignupUser),
    Failed(String),
}

impl SubmissionOutcome {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionOutcome::Idle => "Idle",
            SubmissionOutcome::Pending => "Pending",
            SubmissionOutcome::Succeeded(_) => "Succeeded",
            SubmissionOutcome::Failed(_) => "Failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionOutcome::Pending)
    }
}

/// Identifies one in-flight request. Completions carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(pub u64);
