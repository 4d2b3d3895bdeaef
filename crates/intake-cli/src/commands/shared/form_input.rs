use anyhow::Context;
use intake_core::OnboardingInput;

use crate::cli::root_commands::FormArgs;

/// Assemble the form from `--from-file` and the field flags.
///
/// Flags win over the file. A flag that is not given leaves the file's value
/// (or the empty default) in place.
pub fn build_input(args: &FormArgs) -> anyhow::Result<OnboardingInput> {
    let mut input = match &args.from_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read form file {}", path.display()))?;
            OnboardingInput::from_json(&text)
                .with_context(|| format!("failed to parse form file {}", path.display()))?
        }
        None => OnboardingInput::default(),
    };

    if let Some(full_name) = &args.full_name {
        input.full_name.clone_from(full_name);
    }
    if let Some(email) = &args.email {
        input.email.clone_from(email);
    }
    if let Some(company) = &args.company {
        input.company_name.clone_from(company);
    }
    if !args.service.is_empty() {
        input.services.clone_from(&args.service);
    }
    if let Some(budget) = &args.budget {
        input.budget_usd = Some(OnboardingInput::parse_budget(budget));
    }
    if let Some(start_date) = &args.start_date {
        input.project_start_date.clone_from(start_date);
    }
    if args.accept_terms {
        input.accept_terms = true;
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn form_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(json.as_bytes()).expect("write form");
        file
    }

    #[test]
    fn flags_only() {
        let args = FormArgs {
            full_name: Some("Ada Lovelace".into()),
            service: vec!["Branding".into()],
            budget: Some("2500".into()),
            accept_terms: true,
            ..Default::default()
        };
        let input = build_input(&args).unwrap();
        assert_eq!(input.full_name, "Ada Lovelace");
        assert_eq!(input.services, vec!["Branding"]);
        assert_eq!(input.budget_usd, Some(2500.0));
        assert!(input.accept_terms);
        assert!(input.email.is_empty());
    }

    #[test]
    fn flags_override_file_values() {
        let file = form_file(
            r#"{"fullName":"Ada Lovelace","email":"old@example.com","services":["UI/UX"],"acceptTerms":true}"#,
        );
        let args = FormArgs {
            from_file: Some(file.path().to_path_buf()),
            email: Some("ada@example.com".into()),
            ..Default::default()
        };
        let input = build_input(&args).unwrap();
        assert_eq!(input.full_name, "Ada Lovelace");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.services, vec!["UI/UX"]);
        assert!(input.accept_terms);
    }

    #[test]
    fn non_numeric_budget_is_nan() {
        let args = FormArgs {
            budget: Some(String::new()),
            ..Default::default()
        };
        let input = build_input(&args).unwrap();
        assert!(input.budget_usd.is_some_and(f64::is_nan));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = form_file("[1, 2, 3]");
        let args = FormArgs {
            from_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = build_input(&args).unwrap_err();
        assert!(err.to_string().contains("failed to parse form file"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = FormArgs {
            from_file: Some("/nonexistent/intake-form.json".into()),
            ..Default::default()
        };
        assert!(build_input(&args).is_err());
    }
}
