//! Assembly of the field-configuration document sent on submit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::logic::choices::{ChoiceLimits, ViolationReport, normalize, sort_alphabetically, validate};
use crate::state::types::{FormValues, RequiredField};

/// The JSON document posted to the submit endpoint.
///
/// Serialized as `{ "label", "required", "choices", "displayAlpha", "default" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Field label.
    pub label: String,
    /// Whether end users must pick a value.
    pub required: bool,
    /// Normalized (and possibly sorted) choices.
    pub choices: Vec<String>,
    /// Whether the choices are displayed alphabetically.
    pub display_alpha: bool,
    /// Default choice as typed.
    pub default: String,
}

/// Why a submit was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Required inputs are empty.
    MissingRequired(Vec<RequiredField>),
    /// The choices break at least one rule.
    Violations(ViolationReport),
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(fields) => {
                let names: Vec<&str> = fields.iter().map(|r| r.name()).collect();
                write!(f, "Please fill out the required fields: {}", names.join(", "))
            }
            Self::Violations(report) => {
                let count = report.violations().len();
                write!(f, "The choices break {count} rule(s); fix them before saving")
            }
        }
    }
}

/// What: Determine which required inputs are still empty.
///
/// Inputs:
/// - `values`: Current form values.
///
/// Output:
/// - Empty inputs among label and default value, in form order.
#[must_use]
pub fn missing_required(values: &FormValues) -> Vec<RequiredField> {
    let mut missing = Vec::new();
    if values.label.is_empty() {
        missing.push(RequiredField::Label);
    }
    if values.default_choice.is_empty() {
        missing.push(RequiredField::Default);
    }
    missing
}

/// What: Gate a submit and build the payload when it may proceed.
///
/// Inputs:
/// - `values`: Current form values.
/// - `limits`: Limits the choices are validated against.
///
/// Output:
/// - `Ok(FieldConfig)` when required inputs are filled and the report is clean;
///   otherwise the reason the submit is blocked.
///
/// Details:
/// - Required inputs are checked first, mirroring a form that refuses to submit
///   before its own rules are even looked at.
/// - Choices are normalized, then sorted only when `display_alpha` is set.
pub fn build_field_config(
    values: &FormValues,
    limits: &ChoiceLimits,
) -> Result<FieldConfig, SubmitBlocked> {
    let missing = missing_required(values);
    if !missing.is_empty() {
        return Err(SubmitBlocked::MissingRequired(missing));
    }
    let report = validate(&values.choices, &values.default_choice, limits);
    if !report.is_clean() {
        return Err(SubmitBlocked::Violations(report));
    }
    let mut choices = normalize(&values.choices, &values.default_choice);
    if values.display_alpha {
        sort_alphabetically(&mut choices);
    }
    Ok(FieldConfig {
        label: values.label.clone(),
        required: values.required,
        choices,
        display_alpha: values.display_alpha,
        default: values.default_choice.clone(),
    })
}
