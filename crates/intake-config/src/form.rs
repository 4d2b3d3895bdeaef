//! Form presentation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default success banner lifetime in seconds.
const fn default_success_banner_secs() -> u64 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    /// How long the success banner stays visible before dismissing itself.
    #[serde(default = "default_success_banner_secs")]
    pub success_banner_secs: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_banner_secs: default_success_banner_secs(),
        }
    }
}

impl FormConfig {
    #[must_use]
    pub const fn success_banner(&self) -> Duration {
        Duration::from_secs(self.success_banner_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_banner_is_three_seconds() {
        let config = FormConfig::default();
        assert_eq!(config.success_banner(), Duration::from_secs(3));
    }
}
