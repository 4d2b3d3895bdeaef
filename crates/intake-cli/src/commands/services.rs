use intake_core::Service;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `intake services`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&Service::ALL, flags.format)
}
