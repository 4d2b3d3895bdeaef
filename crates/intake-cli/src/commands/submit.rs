use std::time::Instant;

use intake_client::SubmissionClient;
use intake_config::IntakeConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared::{form_input::build_input, violations};
use crate::form::{Banner, FormController, SubmitOutcome};
use crate::output::output;
use crate::progress::Progress;

/// Handle `intake submit`.
///
/// The banner is read at the instant the submission finishes, so a success
/// always shows its banner once; the expiry window only matters to a surface
/// that keeps rendering. The spinner and banner go to stderr and are hidden
/// for `--format json` and `--quiet` (see [`crate::ui`]), leaving the
/// `SubmissionResult` on stdout as the only report.
pub async fn handle(
    args: &SubmitArgs,
    config: &IntakeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = SubmissionClient::from_config(&config.submission)?;
    let mut form = FormController::new(client, config.form.success_banner());
    form.set_input(build_input(&args.form)?);
    if let Some(query) = &args.query {
        form.prefill(query);
    }

    let progress = Progress::spinner("Submitting...");
    match form.submit().await {
        SubmitOutcome::Finished(result) => {
            match form.banner(Instant::now()) {
                Some(Banner::Success(message)) => progress.finish_ok(message),
                Some(Banner::Error(message)) => progress.finish_err(message),
                None => progress.finish_clear(),
            }
            output(&result, flags.format)?;
            if result.success {
                Ok(())
            } else {
                anyhow::bail!("{}", result.message)
            }
        }
        SubmitOutcome::Invalid => {
            progress.finish_err("Please fix the highlighted fields");
            match form.errors() {
                Some(errors) => violations::reject(errors, flags),
                None => anyhow::bail!("form is invalid"),
            }
        }
        SubmitOutcome::Busy => {
            progress.finish_clear();
            anyhow::bail!("a submission is already in progress")
        }
    }
}
