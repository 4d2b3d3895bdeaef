//! # intake-config
//!
//! Layered configuration loading for the intake form using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`INTAKE_*` prefix, `__` as separator)
//! 2. `ONBOARD_URL`, the destination shorthand, mapped to `submission.endpoint`
//! 3. Project-level `.intake/config.toml`
//! 4. User-level `~/.config/intake/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `INTAKE_SUBMISSION__ENDPOINT` -> `submission.endpoint`,
//! `INTAKE_FORM__SUCCESS_BANNER_SECS` -> `form.success_banner_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use intake_config::IntakeConfig;
//!
//! let config = IntakeConfig::load_with_dotenv().expect("config");
//!
//! if config.submission.is_sandbox() {
//!     println!("submissions are simulated");
//! }
//! ```

mod error;
mod form;
mod submission;

pub use error::ConfigError;
pub use form::FormConfig;
pub use submission::SubmissionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the submission destination.
pub const ENDPOINT_ENV: &str = "ONBOARD_URL";

/// Prefix for structured environment overrides.
pub const ENV_PREFIX: &str = "INTAKE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub form: FormConfig,
}

impl IntakeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".intake/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Destination shorthand
        figment = figment.merge(Env::raw().filter_map(|key| {
            key.as_str()
                .eq_ignore_ascii_case(ENDPOINT_ENV)
                .then(|| "submission.endpoint".into())
        }));

        // Layer 4: Structured environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("intake").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors. Silently does
    /// nothing if none is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
