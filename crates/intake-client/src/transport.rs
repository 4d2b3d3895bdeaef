//! Delivery strategies for validated submissions.
//!
//! A live endpoint gets a JSON `POST`; a placeholder endpoint (see
//! [`SubmissionConfig::is_sandbox`]) never leaves the process and echoes the
//! submission back after a short simulated delay.

use std::time::Duration;

use intake_config::SubmissionConfig;
use intake_core::OnboardingSubmission;
use serde_json::Value;

use crate::error::SubmissionError;
use crate::http::check_response;

// ── Strategy ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Transport {
    Http(HttpTransport),
    Sandbox(SandboxTransport),
}

impl Transport {
    /// Pick the strategy for a configured endpoint.
    ///
    /// Returns `Ok(None)` when no endpoint is set.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &SubmissionConfig) -> Result<Option<Self>, SubmissionError> {
        let Some(endpoint) = config.endpoint() else {
            return Ok(None);
        };

        if config.is_sandbox() {
            tracing::debug!(endpoint, "placeholder endpoint, submissions are simulated");
            return Ok(Some(Self::Sandbox(SandboxTransport::new(
                config.sandbox_delay(),
            ))));
        }

        Ok(Some(Self::Http(HttpTransport::new(
            endpoint,
            &config.user_agent,
        )?)))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Sandbox(_) => "sandbox",
        }
    }

    /// Deliver one submission, returning the echoed record if there is one.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::send`]. The sandbox never fails.
    pub async fn send(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<Option<OnboardingSubmission>, SubmissionError> {
        match self {
            Self::Http(http) => http.send(submission).await,
            Self::Sandbox(sandbox) => Ok(Some(sandbox.send(submission).await)),
        }
    }
}

// ── Live endpoint ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`SubmissionError::Transport`] if the client cannot be built.
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self, SubmissionError> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `POST` the submission as JSON.
    ///
    /// Any 2xx status is an acceptance. The body is inspected for an echo but
    /// an unparseable or unrelated body does not turn success into failure.
    ///
    /// # Errors
    ///
    /// - [`SubmissionError::Transport`] if no response arrives or its body
    ///   cannot be read.
    /// - [`SubmissionError::Rejected`] for non-2xx statuses.
    pub async fn send(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<Option<OnboardingSubmission>, SubmissionError> {
        tracing::debug!(endpoint = %self.endpoint, "posting submission");
        let resp = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!(status, bytes = body.len(), "submission accepted");
        Ok(parse_echo(&body))
    }
}

/// Recover the accepted record from a success body.
///
/// Accepts the record at the top level or wrapped as `{"data": ...}`.
fn parse_echo(body: &str) -> Option<OnboardingSubmission> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let candidate = match value {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data")?,
        other => other,
    };
    serde_json::from_value(candidate).ok()
}

// ── Placeholder endpoint ───────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SandboxTransport {
    delay: Duration,
}

impl SandboxTransport {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn send(&self, submission: &OnboardingSubmission) -> OnboardingSubmission {
        tracing::info!(
            delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
            "simulating submission"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        submission.clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use intake_core::Service;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn submission() -> OnboardingSubmission {
        OnboardingSubmission {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company_name: "Analytical Engines Ltd".into(),
            services: vec![Service::UiUx, Service::WebDev],
            budget_usd: Some(50_000),
            project_start_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            accept_terms: true,
        }
    }

    fn config(endpoint: &str) -> SubmissionConfig {
        SubmissionConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    #[test]
    fn unset_endpoint_has_no_transport() {
        assert!(Transport::from_config(&config("")).unwrap().is_none());
    }

    #[test]
    fn placeholder_host_selects_sandbox() {
        let transport = Transport::from_config(&config("https://example.com/onboard"))
            .unwrap()
            .unwrap();
        assert_eq!(transport.kind(), "sandbox");
    }

    #[test]
    fn real_host_selects_http() {
        let transport = Transport::from_config(&config("https://hooks.agency.io/onboard"))
            .unwrap()
            .unwrap();
        assert_eq!(transport.kind(), "http");
        let Transport::Http(http) = transport else {
            unreachable!()
        };
        assert_eq!(http.endpoint(), "https://hooks.agency.io/onboard");
    }

    #[test]
    fn echo_at_top_level_or_under_data() {
        let wire = serde_json::to_value(submission()).unwrap();
        assert_eq!(parse_echo(&wire.to_string()), Some(submission()));

        let wrapped = json!({ "ok": true, "data": wire });
        assert_eq!(parse_echo(&wrapped.to_string()), Some(submission()));
    }

    #[test]
    fn unrelated_bodies_have_no_echo() {
        assert_eq!(parse_echo(""), None);
        assert_eq!(parse_echo("ok"), None);
        assert_eq!(parse_echo(r#"{"id": 17}"#), None);
        assert_eq!(parse_echo(r#"{"data": null}"#), None);
    }

    #[tokio::test(start_paused = true)]
    async fn sandbox_waits_then_echoes() {
        let sandbox = SandboxTransport::new(Duration::from_secs(1));
        let started = tokio::time::Instant::now();
        let echoed = sandbox.send(&submission()).await;
        assert_eq!(echoed, submission());
        assert!(started.elapsed() >= Duration::from_secs(1));
    }
}
