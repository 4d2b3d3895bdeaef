//! Submission endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Hosts treated as placeholders when no list is configured.
fn default_sandbox_hosts() -> Vec<String> {
    vec![String::from("example.com")]
}

/// Default simulated round-trip for sandbox submissions, in milliseconds.
const fn default_sandbox_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    format!("intake/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionConfig {
    /// Destination URL for form submissions. Empty means "not set".
    #[serde(default)]
    pub endpoint: String,

    /// Placeholder hosts. An endpoint on one of these hosts (or a subdomain)
    /// is never contacted; submissions are simulated instead.
    #[serde(default = "default_sandbox_hosts")]
    pub sandbox_hosts: Vec<String>,

    /// Simulated latency for sandbox submissions.
    #[serde(default = "default_sandbox_delay_ms")]
    pub sandbox_delay_ms: u64,

    /// `User-Agent` header sent with live submissions.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            sandbox_hosts: default_sandbox_hosts(),
            sandbox_delay_ms: default_sandbox_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl SubmissionConfig {
    /// The configured endpoint, trimmed, or `None` when unset or blank.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        let endpoint = self.endpoint.trim();
        (!endpoint.is_empty()).then_some(endpoint)
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }

    /// Whether the endpoint points at a placeholder host.
    ///
    /// Matches the URL host exactly or as a subdomain, case-insensitively.
    /// Unparseable or unset endpoints are never sandboxed.
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        let Some(host) = self
            .endpoint()
            .and_then(|e| Url::parse(e).ok())
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        else {
            return false;
        };

        self.sandbox_hosts.iter().any(|sandbox| {
            let sandbox = sandbox.trim().to_ascii_lowercase();
            !sandbox.is_empty()
                && (host == sandbox
                    || host
                        .strip_suffix(sandbox.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.')))
        })
    }

    #[must_use]
    pub const fn sandbox_delay(&self) -> Duration {
        Duration::from_millis(self.sandbox_delay_ms)
    }

    /// Check that a configured endpoint is an absolute `http`/`https` URL.
    ///
    /// An unset endpoint passes; that case is reported at submission time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a malformed or non-HTTP URL.
    pub fn check_endpoint(&self) -> Result<(), ConfigError> {
        let Some(endpoint) = self.endpoint() else {
            return Ok(());
        };

        let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidValue {
            field: "submission.endpoint".into(),
            reason: e.to_string(),
        })?;

        if matches!(url.scheme(), "http" | "https") {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "submission.endpoint".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            })
        }
    }
}
