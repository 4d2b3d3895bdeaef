use intake_core::prefill::services_from_query;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PrefillArgs;
use crate::output::output;

/// Handle `intake prefill`.
pub fn handle(args: &PrefillArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&services_from_query(&args.query), flags.format)
}
