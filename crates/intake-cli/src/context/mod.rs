mod config_warnings;

pub use config_warnings::warn_unconfigured;

use anyhow::Context;
use intake_config::IntakeConfig;

/// Load layered configuration (`.env`, TOML files, environment).
///
/// A malformed endpoint is only logged here: field errors are reported
/// first, and a submission to that endpoint fails with a transport error.
pub fn load_config() -> anyhow::Result<IntakeConfig> {
    let config = IntakeConfig::load_with_dotenv().context("failed to load intake configuration")?;
    if let Err(error) = config.submission.check_endpoint() {
        tracing::warn!(%error, "submission endpoint looks invalid");
    }
    Ok(config)
}
