use intake_config::{ENDPOINT_ENV, IntakeConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &IntakeConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &IntakeConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.submission.is_configured() {
        if has_env_prefix(&env_keys, "INTAKE_SUBMISSION") {
            warnings.push(
                "Submission endpoint appears unset while INTAKE_SUBMISSION* env vars exist. Use double underscores (example: INTAKE_SUBMISSION__ENDPOINT)."
                    .to_string(),
            );
        } else if has_env_prefix(&env_keys, "NEXT_PUBLIC_ONBOARD") {
            warnings.push(format!(
                "Submission endpoint appears unset while NEXT_PUBLIC_ONBOARD* env vars exist. Set {ENDPOINT_ENV} instead."
            ));
        }
    }

    if has_env_prefix(&env_keys, "INTAKE_FORM") && !has_env_prefix(&env_keys, "INTAKE_FORM__") {
        warnings.push(
            "INTAKE_FORM* env vars are ignored. Use double underscores (example: INTAKE_FORM__SUCCESS_BANNER_SECS)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use intake_config::{IntakeConfig, SubmissionConfig};
    use pretty_assertions::assert_eq;

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_endpoint() {
        let warnings = collect_unconfigured_warnings(
            &IntakeConfig::default(),
            env(&["INTAKE_SUBMISSION_ENDPOINT"]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("INTAKE_SUBMISSION__ENDPOINT"));
    }

    #[test]
    fn warns_for_web_framework_variable_name() {
        let warnings = collect_unconfigured_warnings(
            &IntakeConfig::default(),
            env(&["NEXT_PUBLIC_ONBOARD_URL"]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ONBOARD_URL"));
    }

    #[test]
    fn warns_for_single_underscore_form_key() {
        let warnings = collect_unconfigured_warnings(
            &IntakeConfig::default(),
            env(&["INTAKE_FORM_SUCCESS_BANNER_SECS"]),
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn does_not_warn_when_configured() {
        let config = IntakeConfig {
            submission: SubmissionConfig {
                endpoint: "https://hooks.agency.io/onboard".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                "INTAKE_SUBMISSION__ENDPOINT",
                "NEXT_PUBLIC_ONBOARD_URL",
                "INTAKE_FORM__SUCCESS_BANNER_SECS",
            ]),
        );
        assert!(warnings.is_empty());
    }
}
