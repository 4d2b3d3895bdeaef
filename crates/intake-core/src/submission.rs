//! The validated onboarding record sent to the intake endpoint.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::Service;

/// An onboarding request that passed every field rule.
///
/// Only [`crate::validation::validate`] produces one from user input, so
/// holding a value of this type means the form was valid at validation
/// time. Serializes to the wire contract: camelCase keys, `budgetUsd`
/// omitted when absent, `projectStartDate` as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSubmission {
    #[schemars(length(min = 2, max = 80))]
    pub full_name: String,

    pub email: String,

    #[schemars(length(min = 2, max = 100))]
    pub company_name: String,

    /// Requested services, deduplicated, in the order first selected.
    #[schemars(length(min = 1))]
    pub services: Vec<Service>,

    /// Whole US dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 100, max = 1_000_000))]
    pub budget_usd: Option<u32>,

    pub project_start_date: NaiveDate,

    pub accept_terms: bool,
}
