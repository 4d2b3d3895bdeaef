//! Outcome of a submission attempt, as rendered back to the user.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::submission::OnboardingSubmission;

/// Message shown when the endpoint accepts a submission.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Message used when a failure carries no text of its own.
pub const FALLBACK_FAILURE_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    /// Echo of the accepted submission, when one is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<OnboardingSubmission>,
}

impl SubmissionResult {
    #[must_use]
    pub fn accepted(data: Option<OnboardingSubmission>) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }

    /// A failed attempt. Blank messages are replaced with
    /// [`FALLBACK_FAILURE_MESSAGE`].
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            success: false,
            message,
            data: None,
        }
    }
}
