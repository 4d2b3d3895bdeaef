//! Form controller: owns the state of one onboarding form.
//!
//! Drives a submission attempt through validation and the submission client,
//! and tracks what the rendered surface shows: inline field errors, whether a
//! request is outstanding, and the banner for the last result.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use intake_client::SubmissionClient;
use intake_core::prefill::services_from_query;
use intake_core::validation::{validate, validate_on};
use intake_core::{
    Field, OnboardingInput, OnboardingSubmission, Service, SubmissionResult, ValidationErrors,
};

/// Result of asking the controller to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// A submission is already outstanding; nothing was started.
    Busy,
    /// Field errors block the network call. See [`FormController::errors`].
    Invalid,
    /// Validation passed and the controller is now submitting.
    Ready(OnboardingSubmission),
}

/// Outcome of a full [`FormController::submit`] round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Busy,
    Invalid,
    Finished(SubmissionResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner<'a> {
    Success(&'a str),
    Error(&'a str),
}

pub struct FormController {
    client: SubmissionClient,
    input: OnboardingInput,
    errors: Option<ValidationErrors>,
    is_submitting: bool,
    last_result: Option<SubmissionResult>,
    success_window: Duration,
    success_until: Option<Instant>,
    prefilled: bool,
    today: Option<NaiveDate>,
}

impl FormController {
    #[must_use]
    pub fn new(client: SubmissionClient, success_window: Duration) -> Self {
        Self {
            client,
            input: OnboardingInput::default(),
            errors: None,
            is_submitting: false,
            last_result: None,
            success_window,
            success_until: None,
            prefilled: false,
            today: None,
        }
    }

    /// Validate against a fixed calendar date instead of the local clock.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Seed the services selection from a query string.
    ///
    /// Applies at most once per form, and only while no service is selected.
    /// Returns the services that were pre-selected.
    pub fn prefill(&mut self, query: &str) -> Vec<Service> {
        if self.prefilled {
            return Vec::new();
        }
        self.prefilled = true;

        if !self.input.services.is_empty() {
            return Vec::new();
        }

        let services = services_from_query(query);
        tracing::debug!(count = services.len(), "pre-filled services from query");
        self.input.services = services.iter().map(|s| s.as_str().to_string()).collect();
        services
    }

    #[must_use]
    pub const fn input(&self) -> &OnboardingInput {
        &self.input
    }

    pub const fn input_mut(&mut self) -> &mut OnboardingInput {
        &mut self.input
    }

    pub fn set_input(&mut self, input: OnboardingInput) {
        self.input = input;
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Field errors from the most recent attempt.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Inline error for one field, if any.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.as_ref().and_then(|errors| errors.first_for(field))
    }

    #[must_use]
    pub const fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    /// Banner to show at `now`.
    ///
    /// A success banner disappears once the success window has elapsed; an
    /// error banner stays until the next attempt.
    #[must_use]
    pub fn banner(&self, now: Instant) -> Option<Banner<'_>> {
        let result = self.last_result.as_ref()?;
        if !result.success {
            return Some(Banner::Error(&result.message));
        }
        self.success_until
            .is_some_and(|until| now < until)
            .then_some(Banner::Success(&result.message))
    }

    /// Validate the current input and, if it passes, mark the form as
    /// submitting.
    pub fn begin_submit(&mut self) -> Attempt {
        if self.is_submitting {
            tracing::debug!("submission already in flight, ignoring");
            return Attempt::Busy;
        }

        let validated = match self.today {
            Some(today) => validate_on(&self.input, today),
            None => validate(&self.input),
        };

        match validated {
            Ok(submission) => {
                self.errors = None;
                self.last_result = None;
                self.success_until = None;
                self.is_submitting = true;
                Attempt::Ready(submission)
            }
            Err(errors) => {
                tracing::debug!(%errors, "form rejected by validation");
                self.errors = Some(errors);
                Attempt::Invalid
            }
        }
    }

    /// Record the result of an outstanding submission.
    ///
    /// Success resets the form to its defaults and opens the success banner
    /// window starting at `now`.
    pub fn finish_submit(&mut self, result: SubmissionResult, now: Instant) {
        self.is_submitting = false;
        if result.success {
            self.input = OnboardingInput::default();
            self.errors = None;
            self.success_until = now.checked_add(self.success_window);
        }
        self.last_result = Some(result);
    }

    /// Run one full attempt: validate, submit, record the result.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Attempt::Busy => return SubmitOutcome::Busy,
            Attempt::Invalid => return SubmitOutcome::Invalid,
            Attempt::Ready(submission) => submission,
        };

        let result = self.client.submit(&submission).await;
        self.finish_submit(result.clone(), Instant::now());
        SubmitOutcome::Finished(result)
    }
}
