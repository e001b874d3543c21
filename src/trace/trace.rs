use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::submit::submit_model::{SignupRequest, SubmissionOutcome};

/// One state-machine transition, written as a JSON line.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub event: String,
    pub from: String,
    pub to: String,

    pub fingerprint: Option<String>,
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, event: &str, from: &SubmissionOutcome, to: &SubmissionOutcome) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            event: event.to_string(),
            from: from.name().to_string(),
            to: to.name().to_string(),
            fingerprint: None,
            status: None,
            message: None,
        }
    }

    pub fn with_request(mut self, request: &SignupRequest) -> Self {
        self.fingerprint = Some(request.fingerprint());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_message(mut self, message: impl ToString) -> Self {
        self.message = Some(message.to_string());
        self
    }
}
