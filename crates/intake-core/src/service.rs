//! The closed set of services a client can request.
//!
//! Wire values are the human-readable labels (`"UI/UX"`, `"Web Dev"`, ...),
//! matched exactly and case-sensitively.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A service category offered to prospective clients.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// Every service, in display order.
    pub const ALL: [Self; 4] = [Self::UiUx, Self::Branding, Self::WebDev, Self::MobileApp];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UiUx => "UI/UX",
            Self::Branding => "Branding",
            Self::WebDev => "Web Dev",
            Self::MobileApp => "Mobile App",
        }
    }

    /// Look up a service by its exact wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.as_str() == label)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::UnknownService(s.to_string()))
    }
}
