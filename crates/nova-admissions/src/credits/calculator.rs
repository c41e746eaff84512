use tracing::debug;

use super::country::CountryType;
use super::domain::{
    Confidence, ConversionMethod, DegreeDetails, DegreeLevel, EctsEstimate,
    NorthAmericanDegreeLevel, SouthAsianDegreeLevel, UkDegreeLevel, ACCREDITATION_DISCLAIMER,
};
use super::validation::{validate_degree_details, FieldError, DEGREE_LEVEL_REQUIRED};
use super::CreditError;

pub const ECTS_PER_YEAR: f64 = 60.0;
pub const US_CREDIT_TO_ECTS: f64 = 2.0;
pub const UK_CREDIT_TO_ECTS: f64 = 0.5;

/// Recognized South Asian degree durations. Pairs outside the table use `years * 60`.
pub const SOUTH_ASIA_DURATION_TABLE: [(SouthAsianDegreeLevel, u8, f64); 4] = [
    (SouthAsianDegreeLevel::Bachelor, 3, 180.0),
    (SouthAsianDegreeLevel::Bachelor, 4, 240.0),
    (SouthAsianDegreeLevel::Master, 1, 60.0),
    (SouthAsianDegreeLevel::Master, 2, 120.0),
];

pub const fn method_label(country_type: CountryType) -> &'static str {
    match country_type {
        CountryType::EuEcts => "Direct: 1 CP = 1 ECTS",
        CountryType::IndiaSubcontinent => "South Asia duration-based mapping",
        CountryType::UsaCanada => "1 US credit = 2 ECTS",
        CountryType::Uk => "1 UK credit = 0.5 ECTS",
        CountryType::Other => "Global fallback: 60 ECTS per year",
    }
}

/// Normalize foreign degree details into an ECTS estimate.
///
/// `details` must be tagged with the same credit system as `country_type`, and every
/// required numeric field must be present and positive; otherwise nothing is computed.
pub fn estimate_credits(
    country_type: CountryType,
    details: &DegreeDetails,
) -> Result<EctsEstimate, CreditError> {
    let found = details.country_type();
    if found != country_type {
        return Err(CreditError::CountryTypeMismatch {
            expected: country_type,
            found,
        });
    }

    let errors = validate_degree_details(details);
    if !errors.is_empty() {
        return Err(CreditError::Invalid(errors));
    }

    let (credits, method, confidence, level) = match details {
        DegreeDetails::EuEcts { credit_points } => (
            *credit_points,
            ConversionMethod::Direct,
            Confidence::High,
            Some(level_from_credit_volume(*credit_points)),
        ),
        DegreeDetails::IndiaSubcontinent {
            degree_level,
            years,
        } => (
            degree_level
                .map(|level| south_asia_credits(level, *years))
                .unwrap_or_default(),
            ConversionMethod::DurationBased,
            Confidence::High,
            degree_level.map(|level| match level {
                SouthAsianDegreeLevel::Bachelor => DegreeLevel::Bachelor,
                SouthAsianDegreeLevel::Master => DegreeLevel::Master,
            }),
        ),
        DegreeDetails::UsaCanada {
            credits,
            degree_level,
        } => (
            credits * US_CREDIT_TO_ECTS,
            ConversionMethod::Conversion,
            Confidence::Medium,
            degree_level.map(|level| match level {
                NorthAmericanDegreeLevel::Associate | NorthAmericanDegreeLevel::Bachelor => {
                    DegreeLevel::Bachelor
                }
                NorthAmericanDegreeLevel::Master => DegreeLevel::Master,
            }),
        ),
        DegreeDetails::Uk {
            credits,
            degree_level,
        } => (
            credits * UK_CREDIT_TO_ECTS,
            ConversionMethod::Conversion,
            Confidence::Medium,
            degree_level.map(|level| match level {
                UkDegreeLevel::Bachelor => DegreeLevel::Bachelor,
                UkDegreeLevel::Master => DegreeLevel::Master,
            }),
        ),
        DegreeDetails::Other {
            years,
            degree_level,
        } => (
            years * ECTS_PER_YEAR,
            ConversionMethod::Fallback,
            Confidence::Low,
            *degree_level,
        ),
    };
    let level = level.ok_or_else(|| {
        CreditError::Invalid(vec![FieldError::new("degree_level", DEGREE_LEVEL_REQUIRED)])
    })?;

    let (min, max) = level.typical_range();
    let estimate = EctsEstimate {
        country_type,
        credits,
        rounded_credits: credits.round() as u32,
        method,
        method_label: method_label(country_type),
        confidence,
        level,
        within_typical_range: (min..=max).contains(&credits),
        disclaimer: ACCREDITATION_DISCLAIMER,
    };

    debug!(
        country_type = country_type.label(),
        method = method.label(),
        credits,
        "estimated ECTS credits"
    );

    Ok(estimate)
}

fn south_asia_credits(level: SouthAsianDegreeLevel, years: u8) -> f64 {
    SOUTH_ASIA_DURATION_TABLE
        .iter()
        .find(|(table_level, table_years, _)| *table_level == level && *table_years == years)
        .map(|(_, _, ects)| *ects)
        .unwrap_or_else(|| f64::from(years) * ECTS_PER_YEAR)
}

/// Credit points alone do not name a level; infer the most likely one from the volume.
fn level_from_credit_volume(ects: f64) -> DegreeLevel {
    if ects >= 300.0 {
        DegreeLevel::Master
    } else if ects >= 180.0 {
        DegreeLevel::Bachelor
    } else if ects >= 60.0 {
        DegreeLevel::Master
    } else {
        DegreeLevel::Bachelor
    }
}
