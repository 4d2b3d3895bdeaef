//! Declarative field validation for onboarding input.
//!
//! Each text field has an ordered table of [`Rule`]s: a predicate and the
//! message reported when it fails. A rule marked `required` ends the table
//! for that field when it fails, so an empty name reports "required" and
//! nothing else. Every other failing rule is reported.
//!
//! Services, budget, start date, and terms need typed checks and are handled
//! by dedicated functions, but follow the same predicate + message shape.
//!
//! Validation is pure: "today" is passed in (or read from the local clock on
//! each call) and compared at day granularity.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::OnboardingInput;
use crate::service::Service;
use crate::submission::OnboardingSubmission;

pub const FULL_NAME_MIN: usize = 2;
pub const FULL_NAME_MAX: usize = 80;
pub const COMPANY_NAME_MIN: usize = 2;
pub const COMPANY_NAME_MAX: usize = 100;
pub const BUDGET_MIN: u32 = 100;
pub const BUDGET_MAX: u32 = 1_000_000;

// ---------------------------------------------------------------------------
// Field & Violation
// ---------------------------------------------------------------------------

/// A form field, named by its wire key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    CompanyName,
    Services,
    BudgetUsd,
    ProjectStartDate,
    AcceptTerms,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 7] = [
        Self::FullName,
        Self::Email,
        Self::CompanyName,
        Self::Services,
        Self::BudgetUsd,
        Self::ProjectStartDate,
        Self::AcceptTerms,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::Services => "services",
            Self::BudgetUsd => "budgetUsd",
            Self::ProjectStartDate => "projectStartDate",
            Self::AcceptTerms => "acceptTerms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

impl Violation {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The non-empty set of violations for a rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} invalid field(s): {}", invalid_fields(.violations).len(), summary(.violations))]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Messages reported for `field`, in rule order.
    pub fn messages_for(&self, field: Field) -> impl Iterator<Item = &str> {
        self.violations
            .iter()
            .filter(move |v| v.field == field)
            .map(|v| v.message.as_str())
    }

    /// The first message for `field`, which is what an inline error shows.
    #[must_use]
    pub fn first_for(&self, field: Field) -> Option<&str> {
        self.messages_for(field).next()
    }

    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Fields with at least one violation, in form order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        invalid_fields(&self.violations)
    }
}

fn invalid_fields(violations: &[Violation]) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| violations.iter().any(|v| v.field == *field))
        .collect()
}

fn summary(violations: &[Violation]) -> String {
    invalid_fields(violations)
        .into_iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Text rule tables
// ---------------------------------------------------------------------------

/// A predicate over a text field and the message shown when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
    /// Stop checking this field when this rule fails.
    pub required: bool,
}

impl Rule {
    const fn required(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self {
            check,
            message,
            required: true,
        }
    }

    const fn new(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self {
            check,
            message,
            required: false,
        }
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

fn not_empty(value: &str) -> bool {
    !value.is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn full_name_min(value: &str) -> bool {
    char_len(value) >= FULL_NAME_MIN
}

fn full_name_max(value: &str) -> bool {
    char_len(value) <= FULL_NAME_MAX
}

fn name_characters(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
}

fn company_name_min(value: &str) -> bool {
    char_len(value) >= COMPANY_NAME_MIN
}

fn company_name_max(value: &str) -> bool {
    char_len(value) <= COMPANY_NAME_MAX
}

/// Address grammar: a local part that does not start with a dot, never two
/// dots in a row, and a dotted domain ending in an alphabetic TLD.
fn email_address(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

const FULL_NAME_RULES: &[Rule] = &[
    Rule::required(not_empty, "Full name is required"),
    Rule::new(full_name_min, "Full name must be at least 2 characters"),
    Rule::new(full_name_max, "Full name must be at most 80 characters"),
    Rule::new(
        name_characters,
        "Full name can only contain letters, spaces, hyphens, and apostrophes",
    ),
];

const EMAIL_RULES: &[Rule] = &[
    Rule::required(not_empty, "Email is required"),
    Rule::new(email_address, "Please enter a valid email address"),
];

const COMPANY_NAME_RULES: &[Rule] = &[
    Rule::required(not_empty, "Company name is required"),
    Rule::new(
        company_name_min,
        "Company name must be at least 2 characters",
    ),
    Rule::new(
        company_name_max,
        "Company name must be at most 100 characters",
    ),
];

/// Rule table for a text field. Non-text fields have none.
#[must_use]
pub const fn text_rules(field: Field) -> &'static [Rule] {
    match field {
        Field::FullName => FULL_NAME_RULES,
        Field::Email => EMAIL_RULES,
        Field::CompanyName => COMPANY_NAME_RULES,
        Field::Services | Field::BudgetUsd | Field::ProjectStartDate | Field::AcceptTerms => &[],
    }
}

fn check_text(field: Field, value: &str, out: &mut Vec<Violation>) {
    for rule in text_rules(field) {
        if (rule.check)(value) {
            continue;
        }
        out.push(Violation::new(field, rule.message));
        if rule.required {
            break;
        }
    }
}

// ---------------------------------------------------------------------------
// Typed checks
// ---------------------------------------------------------------------------

pub const SERVICES_REQUIRED_MESSAGE: &str = "Please select at least one service";
pub const TERMS_MESSAGE: &str = "You must accept the terms and conditions";
pub const START_DATE_REQUIRED_MESSAGE: &str = "Project start date is required";
pub const START_DATE_INVALID_MESSAGE: &str = "Please enter a valid date";
pub const START_DATE_PAST_MESSAGE: &str = "Project start date must be today or later";

fn check_services(raw: &[String], out: &mut Vec<Violation>) -> Vec<Service> {
    if raw.is_empty() {
        out.push(Violation::new(Field::Services, SERVICES_REQUIRED_MESSAGE));
        return Vec::new();
    }

    let mut selected = Vec::with_capacity(raw.len());
    for label in raw {
        match Service::from_label(label) {
            Some(service) if !selected.contains(&service) => selected.push(service),
            Some(_) => {}
            None => out.push(Violation::new(
                Field::Services,
                format!("Invalid service selected: {label}"),
            )),
        }
    }
    selected
}

/// `None` and `NaN` both mean "no budget given".
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn check_budget(raw: Option<f64>, out: &mut Vec<Violation>) -> Option<u32> {
    let value = raw.filter(|v| !v.is_nan())?;
    let before = out.len();

    if !value.is_finite() || value.fract() != 0.0 {
        out.push(Violation::new(
            Field::BudgetUsd,
            "Budget must be a whole number",
        ));
    }
    if value < f64::from(BUDGET_MIN) {
        out.push(Violation::new(
            Field::BudgetUsd,
            "Budget must be at least $100",
        ));
    }
    if value > f64::from(BUDGET_MAX) {
        out.push(Violation::new(
            Field::BudgetUsd,
            "Budget must not exceed $1,000,000",
        ));
    }

    // In range and integral, so the cast is exact.
    (out.len() == before).then_some(value as u32)
}

/// Parse a calendar date: `YYYY-MM-DD`, or an RFC 3339 timestamp whose own
/// calendar date is used.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn check_start_date(raw: &str, today: NaiveDate, out: &mut Vec<Violation>) -> Option<NaiveDate> {
    let message = if raw.trim().is_empty() {
        START_DATE_REQUIRED_MESSAGE
    } else {
        match parse_calendar_date(raw) {
            Some(date) if date >= today => return Some(date),
            Some(_) => START_DATE_PAST_MESSAGE,
            None => START_DATE_INVALID_MESSAGE,
        }
    };
    out.push(Violation::new(Field::ProjectStartDate, message));
    None
}

fn check_terms(accepted: bool, out: &mut Vec<Violation>) {
    if !accepted {
        out.push(Violation::new(Field::AcceptTerms, TERMS_MESSAGE));
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate `input` against today's local calendar date.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every failed rule.
pub fn validate(input: &OnboardingInput) -> Result<OnboardingSubmission, ValidationErrors> {
    validate_on(input, Local::now().date_naive())
}

/// Validate `input` treating `today` as the earliest acceptable start date.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every failed rule.
pub fn validate_on(
    input: &OnboardingInput,
    today: NaiveDate,
) -> Result<OnboardingSubmission, ValidationErrors> {
    let mut violations = Vec::new();

    check_text(Field::FullName, &input.full_name, &mut violations);
    check_text(Field::Email, &input.email, &mut violations);
    check_text(Field::CompanyName, &input.company_name, &mut violations);
    let services = check_services(&input.services, &mut violations);
    let budget_usd = check_budget(input.budget_usd, &mut violations);
    let start_date = check_start_date(&input.project_start_date, today, &mut violations);
    check_terms(input.accept_terms, &mut violations);

    match (violations.is_empty(), start_date) {
        (true, Some(project_start_date)) => Ok(OnboardingSubmission {
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            company_name: input.company_name.clone(),
            services,
            budget_usd,
            project_start_date,
            accept_terms: true,
        }),
        _ => Err(ValidationErrors { violations }),
    }
}
