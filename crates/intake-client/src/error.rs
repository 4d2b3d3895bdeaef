//! Submission error types.
//!
//! The `Display` text of each variant is the message shown to the user;
//! [`crate::SubmissionClient::submit`] turns every error into a failed
//! [`intake_core::SubmissionResult`] carrying that text.

use std::error::Error as _;

use thiserror::Error;

use crate::http::status_message;

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// No destination URL is configured.
    #[error("External API endpoint is not set")]
    EndpointNotSet,

    /// The request never produced a response (DNS, refused connection,
    /// unreadable body, ...).
    #[error("{}", transport_message(.0))]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("{}", rejection_message(.status, .detail))]
    Rejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Server-supplied explanation, if any could be extracted.
        detail: Option<String>,
    },
}

impl SubmissionError {
    /// Whether resubmitting the same form could succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::EndpointNotSet => false,
            Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status == 429 || *status >= 500,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn rejection_message(status: &u16, detail: &Option<String>) -> String {
    status_message(*status, detail.as_deref())
}

/// The reqwest error followed by its source chain, e.g.
/// `error sending request for url (...): tcp connect error: Connection refused`.
fn transport_message(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
