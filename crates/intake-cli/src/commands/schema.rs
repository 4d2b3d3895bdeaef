use intake_core::{OnboardingSubmission, SubmissionResult};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output;

/// Handle `intake schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.kind {
        SchemaKind::Request => schema_for!(OnboardingSubmission),
        SchemaKind::Response => schema_for!(SubmissionResult),
    };
    output(&schema, flags.format)
}
