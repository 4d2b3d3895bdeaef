//! Wire contract tests: validated submissions and results serialize to JSON
//! that satisfies their schemars-generated JSON Schema.

use chrono::{Days, Local};
use intake_core::validation::validate;
use intake_core::{OnboardingInput, OnboardingSubmission, SubmissionResult};
use schemars::schema_for;
use serde_json::json;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn ada_lovelace() -> OnboardingInput {
    let tomorrow = Local::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .expect("tomorrow exists");

    OnboardingInput::from_value(json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "companyName": "Analytical Engines Ltd",
        "services": ["UI/UX", "Web Dev"],
        "budgetUsd": 50000,
        "projectStartDate": tomorrow.format("%Y-%m-%d").to_string(),
        "acceptTerms": true
    }))
    .expect("object decodes")
}

#[test]
fn validated_submission_matches_request_schema() {
    let submission = validate(&ada_lovelace()).expect("scenario input is valid");

    let schema = serde_json::to_value(schema_for!(OnboardingSubmission)).unwrap();
    let instance = serde_json::to_value(&submission).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "request schema violations: {errors:?}");
}

#[test]
fn request_schema_rejects_unknown_service() {
    let schema = serde_json::to_value(schema_for!(OnboardingSubmission)).unwrap();
    let instance = json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "companyName": "Analytical Engines Ltd",
        "services": ["Consulting"],
        "projectStartDate": "2030-01-01",
        "acceptTerms": true
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn submission_roundtrips_through_json() {
    let submission = validate(&ada_lovelace()).unwrap();
    let json = serde_json::to_string(&submission).unwrap();
    let back: OnboardingSubmission = serde_json::from_str(&json).unwrap();
    assert_eq!(back, submission);
}

#[test]
fn result_with_echo_matches_response_schema() {
    let submission = validate(&ada_lovelace()).unwrap();
    let result = SubmissionResult::accepted(Some(submission));

    let schema = serde_json::to_value(schema_for!(SubmissionResult)).unwrap();
    let instance = serde_json::to_value(&result).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "response schema violations: {errors:?}");
}

#[test]
fn lenient_input_from_partial_form_reports_missing_fields() {
    let input = OnboardingInput::from_value(json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com"
    }))
    .unwrap();

    let err = validate(&input).expect_err("incomplete form is invalid");
    assert!(!err.violations().is_empty());
}
