use crate::{
    api::client::{ApiResponse, SignupApi, interpret_response},
    form::form_model::{Field, FormSnapshot},
    submit::{
        error::SignupError,
        submit_model::{
            DEFAULT_HOME_ROUTE, FAILURE_MESSAGE, SignupRequest, SubmissionOutcome, SubmitTicket,
        },
    },
    trace::{logger::TraceLogger, trace::TraceEvent},
};

/// The sign-up form component.
///
/// Transitions: `Idle -> Pending -> {Succeeded, Failed}`, `Failed -> Pending`
/// on retry. `Succeeded` navigates to the home route and unmounts, so no
/// further submits are possible.
pub struct SignUpForm {
    pub snapshot: FormSnapshot,
    pub outcome: SubmissionOutcome,
    pub navigate_to: Option<String>,

    home_route: String,
    mounted: bool,
    in_flight: Option<(SubmitTicket, SignupRequest)>,
    next_ticket: u64,
    step: u64,
    tracer: TraceLogger,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::with_tracer(TraceLogger::disabled())
    }

    pub fn with_tracer(tracer: TraceLogger) -> Self {
        Self {
            snapshot: FormSnapshot::new(),
            outcome: SubmissionOutcome::Idle,
            navigate_to: None,
            home_route: DEFAULT_HOME_ROUTE.to_string(),
            mounted: true,
            in_flight: None,
            next_ticket: 0,
            step: 0,
            tracer,
        }
    }

    pub fn with_home_route(mut self, route: &str) -> Self {
        self.home_route = route.to_string();
        self
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.snapshot.change(field, value);
    }

    pub fn blur(&mut self, field: Field) {
        self.snapshot.blur(field);
    }

    /// Whether the submit control is present (it disappears after success).
    pub fn submit_present(&self) -> bool {
        self.mounted && !matches!(self.outcome, SubmissionOutcome::Succeeded(_))
    }

    /// Submit control enablement; holds at every point, not only at submit time.
    pub fn submit_enabled(&self) -> bool {
        self.submit_present() && self.snapshot.is_valid() && !self.outcome.is_pending()
    }

    /// `Idle/Failed -> Pending`. Returns the request the caller must send.
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, SignupRequest), SignupError> {
        if !self.submit_present() {
            return Err(SignupError::NotMounted);
        }
        if self.outcome.is_pending() {
            return Err(SignupError::AlreadyPending);
        }
        if !self.snapshot.is_valid() {
            self.snapshot.touch_all();
            let fields = Field::ALL
                .into_iter()
                .filter(|f| self.snapshot.field(*f).error.is_some())
                .collect();
            return Err(SignupError::FormInvalid { fields });
        }

        self.next_ticket += 1;
        let ticket = SubmitTicket(self.next_ticket);
        let request = SignupRequest::from_snapshot(&self.snapshot);

        let trace = TraceEvent::now(self.bump_step(), "submit", &self.outcome, &SubmissionOutcome::Pending)
            .with_request(&request);
        self.tracer.log(&trace);

        self.outcome = SubmissionOutcome::Pending;
        self.in_flight = Some((ticket, request.clone()));
        Ok((ticket, request))
    }

    /// Apply the result of the request identified by `ticket`.
    ///
    /// Returns `false` if the completion was dropped because the ticket is
    /// stale or the component was torn down in the meantime.
    pub fn complete(&mut self, ticket: SubmitTicket, result: Result<ApiResponse, SignupError>) -> bool {
        let current = match &self.in_flight {
            Some((current, request)) if *current == ticket && self.mounted => Some(request.clone()),
            _ => None,
        };
        let Some(request) = current else {
            let trace = TraceEvent::now(self.bump_step(), "stale_completion", &self.outcome, &self.outcome)
                .with_message(format!("ticket {}", ticket.0));
            self.tracer.log(&trace);
            return false;
        };
        self.in_flight = None;

        let (next, status) = match result {
            Ok(response) => {
                let status = response.status;
                match interpret_response(&response, &request) {
                    Ok(user) => (SubmissionOutcome::Succeeded(user), Some(status)),
                    Err(message) => (SubmissionOutcome::Failed(message), Some(status)),
                }
            }
            Err(e) => {
                let trace = TraceEvent::now(self.step, "transport_error", &self.outcome, &self.outcome)
                    .with_request(&request)
                    .with_message(&e);
                self.tracer.log(&trace);
                (SubmissionOutcome::Failed(FAILURE_MESSAGE.to_string()), None)
            }
        };

        let mut trace = TraceEvent::now(self.bump_step(), "response", &self.outcome, &next)
            .with_request(&request);
        if let Some(status) = status {
            trace = trace.with_status(status);
        }
        if let SubmissionOutcome::Failed(message) = &next {
            trace = trace.with_message(message);
        }
        self.tracer.log(&trace);

        if matches!(next, SubmissionOutcome::Succeeded(_)) {
            self.navigate_to = Some(self.home_route.clone());
            self.mounted = false;
        }
        self.outcome = next;
        true
    }

    /// Begin, send and complete in one call.
    pub fn submit(&mut self, api: &dyn SignupApi) -> Result<&SubmissionOutcome, SignupError> {
        let (ticket, request) = self.begin_submit()?;
        let result = api.post_signup(&request);
        self.complete(ticket, result);
        Ok(&self.outcome)
    }

    /// Tear the component down. Any in-flight request is abandoned and its
    /// completion will be ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if self.in_flight.take().is_some() {
            let trace = TraceEvent::now(self.bump_step(), "cancel", &self.outcome, &SubmissionOutcome::Idle);
            self.tracer.log(&trace);
            self.outcome = SubmissionOutcome::Idle;
        }
        self.mounted = false;
    }

    fn bump_step(&mut self) -> u64 {
        self.step += 1;
        self.step
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}
