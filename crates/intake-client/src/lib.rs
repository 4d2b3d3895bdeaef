//! # intake-client
//!
//! Delivers validated onboarding submissions to the configured intake
//! endpoint and reports every outcome as a [`SubmissionResult`].
//!
//! [`SubmissionClient::submit`] never fails and never panics: a missing
//! endpoint, a transport error or a rejection all come back as a failed
//! result whose message is ready to show to the user. Callers that want the
//! typed error use [`SubmissionClient::deliver`] instead.
//!
//! ```no_run
//! # async fn demo(submission: intake_core::OnboardingSubmission) {
//! use intake_client::SubmissionClient;
//! use intake_config::IntakeConfig;
//!
//! let config = IntakeConfig::load_with_dotenv().unwrap_or_default();
//! let client = SubmissionClient::from_config(&config.submission).expect("client");
//! let result = client.submit(&submission).await;
//! println!("{}", result.message);
//! # }
//! ```

mod error;
pub mod http;
pub mod transport;

pub use error::SubmissionError;
pub use transport::Transport;

use intake_config::SubmissionConfig;
use intake_core::{OnboardingSubmission, SubmissionResult};

#[derive(Debug, Clone)]
pub struct SubmissionClient {
    transport: Option<Transport>,
}

impl SubmissionClient {
    /// Build a client for the configured endpoint.
    ///
    /// An unset endpoint still yields a client; its submissions fail with
    /// [`SubmissionError::EndpointNotSet`].
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &SubmissionConfig) -> Result<Self, SubmissionError> {
        Ok(Self::new(Transport::from_config(config)?))
    }

    #[must_use]
    pub const fn new(transport: Option<Transport>) -> Self {
        Self { transport }
    }

    #[must_use]
    pub const fn transport(&self) -> Option<&Transport> {
        self.transport.as_ref()
    }

    /// Submit and fold the outcome into a [`SubmissionResult`].
    pub async fn submit(&self, submission: &OnboardingSubmission) -> SubmissionResult {
        match self.deliver(submission).await {
            Ok(echo) => SubmissionResult::accepted(echo),
            Err(e) => {
                tracing::warn!(error = %e, retryable = e.is_retryable(), "submission failed");
                SubmissionResult::failed(e.to_string())
            }
        }
    }

    /// Submit and return the echoed record, if the endpoint sent one back.
    ///
    /// # Errors
    ///
    /// - [`SubmissionError::EndpointNotSet`] when no endpoint is configured.
    /// - [`SubmissionError::Transport`] when no response arrives.
    /// - [`SubmissionError::Rejected`] for non-2xx statuses.
    pub async fn deliver(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<Option<OnboardingSubmission>, SubmissionError> {
        let transport = self
            .transport
            .as_ref()
            .ok_or(SubmissionError::EndpointNotSet)?;
        tracing::info!(
            transport = transport.kind(),
            services = submission.services.len(),
            "submitting onboarding form"
        );
        transport.send(submission).await
    }
}
