use serde::{Deserialize, Serialize};

use super::country::find_country;
use super::domain::DegreeDetails;

const MAX_EU_CREDIT_POINTS: f64 = 500.0;
const MAX_US_CREDITS: f64 = 300.0;
const MAX_UK_CREDITS: f64 = 600.0;
const MAX_FALLBACK_YEARS: f64 = 10.0;
const FALLBACK_YEAR_STEP: f64 = 0.5;

/// A rejected degree field together with the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collect every field problem for the given degree details. Empty means computable.
pub fn validate_degree_details(details: &DegreeDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match details {
        DegreeDetails::EuEcts { credit_points } => {
            check_credit_total(
                &mut errors,
                "credit_points",
                "Credit points",
                *credit_points,
                MAX_EU_CREDIT_POINTS,
            );
        }
        DegreeDetails::IndiaSubcontinent {
            degree_level,
            years,
        } => {
            check_level(&mut errors, degree_level.is_some());
            if *years == 0 {
                errors.push(FieldError::new(
                    "years",
                    "Degree duration must be at least 1 year",
                ));
            }
        }
        DegreeDetails::UsaCanada {
            credits,
            degree_level,
        } => {
            check_credit_total(&mut errors, "credits", "US credits", *credits, MAX_US_CREDITS);
            check_level(&mut errors, degree_level.is_some());
        }
        DegreeDetails::Uk {
            credits,
            degree_level,
        } => {
            check_credit_total(&mut errors, "credits", "UK credits", *credits, MAX_UK_CREDITS);
            check_level(&mut errors, degree_level.is_some());
        }
        DegreeDetails::Other {
            years,
            degree_level,
        } => {
            let years = *years;
            if !years.is_finite() || years <= 0.0 {
                errors.push(FieldError::new(
                    "years",
                    "Years completed must be greater than 0",
                ));
            } else if years > MAX_FALLBACK_YEARS {
                errors.push(FieldError::new(
                    "years",
                    format!("Years completed must be between 0.5 and {MAX_FALLBACK_YEARS:.0}"),
                ));
            } else if (years / FALLBACK_YEAR_STEP).fract() != 0.0 {
                errors.push(FieldError::new(
                    "years",
                    "Years completed must be given in half-year steps",
                ));
            }
            check_level(&mut errors, degree_level.is_some());
        }
    }

    errors
}

pub(crate) const DEGREE_LEVEL_REQUIRED: &str = "Degree level is required";

fn check_level(errors: &mut Vec<FieldError>, present: bool) {
    if !present {
        errors.push(FieldError::new("degree_level", DEGREE_LEVEL_REQUIRED));
    }
}

fn check_credit_total(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: f64,
    max: f64,
) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(FieldError::new(
            field,
            format!("{label} must be greater than 0"),
        ));
    } else if !(1.0..=max).contains(&value) {
        errors.push(FieldError::new(
            field,
            format!("{label} must be between 1 and {max:.0}"),
        ));
    }
}

/// Everything the estimator form collects before a result is shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EctsFormSubmission {
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub degree_details: Option<DegreeDetails>,
    #[serde(default)]
    pub disclaimer_accepted: bool,
}

/// Validate the complete estimator form, accumulating every message.
pub fn validate_ects_form(form: &EctsFormSubmission) -> Vec<String> {
    let mut errors = Vec::new();

    let name_ok = form
        .student_name
        .as_deref()
        .map(|name| name.trim().chars().count() >= 2)
        .unwrap_or(false);
    if !name_ok {
        errors.push("Name must be at least 2 characters".to_string());
    }

    if let Some(email) = form.email.as_deref().map(str::trim) {
        if !email.is_empty() && !email.contains('@') {
            errors.push("Please enter a valid email address".to_string());
        }
    }

    let country = form
        .country_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty());
    match country {
        None => errors.push("Please select a country".to_string()),
        Some(code) => {
            if let (Some(details), Some(known)) = (&form.degree_details, find_country(code)) {
                if details.country_type() != known.country_type {
                    errors.push(format!(
                        "Degree details do not match the credit system for {}",
                        known.name
                    ));
                }
            }
        }
    }

    match &form.degree_details {
        None => errors.push("Please provide degree details".to_string()),
        Some(details) => errors.extend(
            validate_degree_details(details)
                .into_iter()
                .map(|error| error.message),
        ),
    }

    if !form.disclaimer_accepted {
        errors.push("You must accept the disclaimer".to_string());
    }

    errors
}
