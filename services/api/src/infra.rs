use metrics_exporter_prometheus::PrometheusHandle;
use nova_admissions::credits::{
    CountryType, DegreeDetails, DegreeLevel, NorthAmericanDegreeLevel, SouthAsianDegreeLevel,
    UkDegreeLevel,
};
use nova_admissions::eligibility::EligibilityFormDraft;
use nova_admissions::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Degree level as typed on the command line; each credit system accepts a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum DegreeLevelArg {
    Associate,
    Bachelor,
    Master,
    Phd,
}

/// Raw numbers collected from flags before they are shaped for one credit system.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DegreeInput {
    pub(crate) credit_points: Option<f64>,
    pub(crate) credits: Option<f64>,
    pub(crate) years: Option<f64>,
    pub(crate) degree_level: Option<DegreeLevelArg>,
}

/// Shape command-line input into the degree details expected for `country_type`.
///
/// Missing numbers become zero so the credit validator reports them with its usual message.
pub(crate) fn degree_details(
    country_type: CountryType,
    input: DegreeInput,
) -> Result<DegreeDetails, AppError> {
    let level = input.degree_level.unwrap_or(DegreeLevelArg::Bachelor);
    let details = match country_type {
        CountryType::EuEcts => DegreeDetails::EuEcts {
            credit_points: input.credit_points.unwrap_or_default(),
        },
        CountryType::IndiaSubcontinent => DegreeDetails::IndiaSubcontinent {
            degree_level: Some(match level {
                DegreeLevelArg::Bachelor => SouthAsianDegreeLevel::Bachelor,
                DegreeLevelArg::Master => SouthAsianDegreeLevel::Master,
                other => return Err(unsupported_level(country_type, other)),
            }),
            years: whole_years(input.years)?,
        },
        CountryType::UsaCanada => DegreeDetails::UsaCanada {
            credits: input.credits.unwrap_or_default(),
            degree_level: Some(match level {
                DegreeLevelArg::Associate => NorthAmericanDegreeLevel::Associate,
                DegreeLevelArg::Bachelor => NorthAmericanDegreeLevel::Bachelor,
                DegreeLevelArg::Master => NorthAmericanDegreeLevel::Master,
                other => return Err(unsupported_level(country_type, other)),
            }),
        },
        CountryType::Uk => DegreeDetails::Uk {
            credits: input.credits.unwrap_or_default(),
            degree_level: Some(match level {
                DegreeLevelArg::Bachelor => UkDegreeLevel::Bachelor,
                DegreeLevelArg::Master => UkDegreeLevel::Master,
                other => return Err(unsupported_level(country_type, other)),
            }),
        },
        CountryType::Other => DegreeDetails::Other {
            years: input.years.unwrap_or_default(),
            degree_level: Some(match level {
                DegreeLevelArg::Bachelor => DegreeLevel::Bachelor,
                DegreeLevelArg::Master => DegreeLevel::Master,
                DegreeLevelArg::Phd => DegreeLevel::Phd,
                other => return Err(unsupported_level(country_type, other)),
            }),
        },
    };
    Ok(details)
}

fn whole_years(years: Option<f64>) -> Result<u8, AppError> {
    let years = years.unwrap_or_default();
    if years.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&years) {
        return Err(AppError::Input(format!(
            "degree duration must be a whole number of years, got {years}"
        )));
    }
    Ok(years as u8)
}

fn unsupported_level(country_type: CountryType, level: DegreeLevelArg) -> AppError {
    AppError::Input(format!(
        "{level:?} degrees are not estimated for {}",
        country_type.label()
    ))
}

pub(crate) fn read_eligibility_draft(path: &Path) -> Result<EligibilityFormDraft, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::Input(format!("failed to parse '{}': {err}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_duration_input_for_south_asia() {
        let details = degree_details(
            CountryType::IndiaSubcontinent,
            DegreeInput {
                years: Some(3.0),
                ..DegreeInput::default()
            },
        )
        .expect("bachelor is supported");

        assert_eq!(
            details,
            DegreeDetails::IndiaSubcontinent {
                degree_level: Some(SouthAsianDegreeLevel::Bachelor),
                years: 3,
            }
        );
    }

    #[test]
    fn rejects_fractional_south_asian_durations() {
        let result = degree_details(
            CountryType::IndiaSubcontinent,
            DegreeInput {
                years: Some(2.5),
                ..DegreeInput::default()
            },
        );
        assert!(matches!(result, Err(AppError::Input(_))));
    }

    #[test]
    fn rejects_levels_a_credit_system_does_not_grade() {
        let result = degree_details(
            CountryType::Uk,
            DegreeInput {
                credits: Some(360.0),
                degree_level: Some(DegreeLevelArg::Associate),
                ..DegreeInput::default()
            },
        );
        assert!(matches!(result, Err(AppError::Input(_))));
    }

    #[test]
    fn missing_numbers_default_to_zero() {
        let details = degree_details(CountryType::EuEcts, DegreeInput::default())
            .expect("details build");
        assert_eq!(details, DegreeDetails::EuEcts { credit_points: 0.0 });
    }
}
