//! Foreign degree credit normalization into ECTS.
//!
//! Every country resolves to one [`CountryType`], and each type has exactly one formula:
//! an exact duration table for South Asia, linear ratios for systems with recognized
//! conversion rates, and `60 ECTS per year` for everything else.

mod calculator;
pub mod country;
pub mod domain;
pub mod validation;

pub use calculator::{
    estimate_credits, method_label, ECTS_PER_YEAR, SOUTH_ASIA_DURATION_TABLE, UK_CREDIT_TO_ECTS,
    US_CREDIT_TO_ECTS,
};
pub use country::{
    classify_country, countries_by_region, countries_of_type, find_country, CountryOption,
    CountryType, COUNTRY_CATALOG,
};
pub use domain::{
    Confidence, ConversionMethod, DegreeDetails, DegreeLevel, EctsEstimate,
    NorthAmericanDegreeLevel, SouthAsianDegreeLevel, UkDegreeLevel, ACCREDITATION_DISCLAIMER,
};
pub use validation::{validate_degree_details, validate_ects_form, EctsFormSubmission, FieldError};

/// Reasons an estimate could not be produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreditError {
    #[error("degree details are incomplete: {}", summarize(.0))]
    Invalid(Vec<FieldError>),
    #[error("degree details tagged {} do not match country type {}", .found.label(), .expected.label())]
    CountryTypeMismatch {
        expected: CountryType,
        found: CountryType,
    },
}

impl CreditError {
    /// User-facing messages for form display.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CreditError::Invalid(errors) => {
                errors.iter().map(|error| error.message.clone()).collect()
            }
            CreditError::CountryTypeMismatch { .. } => vec![self.to_string()],
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
