//! Raw onboarding input as captured from the form.
//!
//! Decoding is deliberately forgiving: any JSON object decodes into an
//! [`OnboardingInput`]. Missing or wrongly-typed fields collapse to empty
//! values so the validator reports them with a field-specific message
//! instead of the decoder rejecting the whole document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::service::Service;

/// The unvalidated form candidate.
///
/// `budget_usd` is a float so it can carry what a numeric input actually
/// produces: fractional values, and `NaN` for an empty field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub company_name: String,

    #[serde(default, deserialize_with = "lenient_string_list")]
    pub services: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget_usd: Option<f64>,

    /// Calendar date as typed, usually `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_start_date: String,

    #[serde(default, deserialize_with = "lenient_flag")]
    pub accept_terms: bool,
}

impl OnboardingInput {
    /// Decode an input from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedInput`] if `json` is not valid JSON or is
    /// not an object. Field-level problems never fail here.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decode an input from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedInput`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::MalformedInput(serde::de::Error::custom(
                "expected a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Set the services selection from a typed list.
    #[must_use]
    pub fn with_services(mut self, services: &[Service]) -> Self {
        self.services = services.iter().map(|s| s.as_str().to_string()).collect();
        self
    }

    /// Parse a budget the way a numeric form input does: blank or
    /// non-numeric text yields `NaN`, which validation treats as "absent".
    #[must_use]
    pub fn parse_budget(raw: &str) -> f64 {
        raw.trim().parse::<f64>().unwrap_or(f64::NAN)
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                // Keep the JSON text so the enumeration check names it.
                other => other.to_string(),
            })
            .collect(),
        Value::String(single) => vec![single],
        _ => Vec::new(),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(n) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => Some(OnboardingInput::parse_budget(&s)),
        _ => Some(f64::NAN),
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}
