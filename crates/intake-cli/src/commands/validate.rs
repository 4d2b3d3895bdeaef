use intake_core::validation::validate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::shared::{form_input::build_input, violations};
use crate::output::output;

/// Handle `intake validate`.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = build_input(&args.form)?;
    match validate(&input) {
        Ok(submission) => output(&submission, flags.format),
        Err(errors) => violations::reject(&errors, flags),
    }
}
