use intake_core::ValidationErrors;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Print every violation, then fail the command with the summary.
pub fn reject(errors: &ValidationErrors, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&errors.violations(), flags.format)?;
    anyhow::bail!("{errors}")
}
