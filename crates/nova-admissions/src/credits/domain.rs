use serde::{Deserialize, Serialize};

use super::country::CountryType;

/// Degree level reported on an estimate and accepted for fallback countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DegreeLevel {
    Bachelor,
    Master,
    Phd,
}

impl DegreeLevel {
    pub const fn description(self) -> &'static str {
        match self {
            DegreeLevel::Bachelor => "Bachelor's Degree Level",
            DegreeLevel::Master => "Master's Degree Level",
            DegreeLevel::Phd => "Doctoral (PhD) Level",
        }
    }

    /// Credit volume usually recognized for a completed degree at this level.
    pub const fn typical_range(self) -> (f64, f64) {
        match self {
            DegreeLevel::Bachelor => (180.0, 240.0),
            DegreeLevel::Master => (60.0, 120.0),
            DegreeLevel::Phd => (180.0, 240.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SouthAsianDegreeLevel {
    Bachelor,
    Master,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NorthAmericanDegreeLevel {
    Associate,
    Bachelor,
    Master,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UkDegreeLevel {
    Bachelor,
    Master,
}

/// Degree facts for one credit system. The tag must agree with the selected country's type.
///
/// Numeric fields default to zero and levels to `None` when absent so missing input
/// surfaces as a field validation message rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DegreeDetails {
    EuEcts {
        #[serde(default)]
        credit_points: f64,
    },
    IndiaSubcontinent {
        #[serde(default)]
        degree_level: Option<SouthAsianDegreeLevel>,
        #[serde(default)]
        years: u8,
    },
    UsaCanada {
        #[serde(default)]
        credits: f64,
        #[serde(default)]
        degree_level: Option<NorthAmericanDegreeLevel>,
    },
    Uk {
        #[serde(default)]
        credits: f64,
        #[serde(default)]
        degree_level: Option<UkDegreeLevel>,
    },
    Other {
        #[serde(default)]
        years: f64,
        #[serde(default)]
        degree_level: Option<DegreeLevel>,
    },
}

impl DegreeDetails {
    pub const fn country_type(&self) -> CountryType {
        match self {
            DegreeDetails::EuEcts { .. } => CountryType::EuEcts,
            DegreeDetails::IndiaSubcontinent { .. } => CountryType::IndiaSubcontinent,
            DegreeDetails::UsaCanada { .. } => CountryType::UsaCanada,
            DegreeDetails::Uk { .. } => CountryType::Uk,
            DegreeDetails::Other { .. } => CountryType::Other,
        }
    }
}

/// Which family of rule produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMethod {
    Direct,
    DurationBased,
    Conversion,
    Fallback,
}

impl ConversionMethod {
    pub const fn label(self) -> &'static str {
        match self {
            ConversionMethod::Direct => "direct",
            ConversionMethod::DurationBased => "duration-based",
            ConversionMethod::Conversion => "conversion",
            ConversionMethod::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn description(self) -> &'static str {
        match self {
            Confidence::High => {
                "High confidence - Standardized system with established conversion rates"
            }
            Confidence::Medium => {
                "Medium confidence - Recognized conversion formula, may vary by institution"
            }
            Confidence::Low => {
                "Low confidence - Estimation only, official evaluation strongly recommended"
            }
        }
    }
}

pub const ACCREDITATION_DISCLAIMER: &str = "This ECTS figure is an informational estimate only. \
All international credentials must be evaluated by uni-assist or the admitting university, \
which alone determine the recognized credit value.";

/// Normalized credit estimate. `credits` keeps full precision; `rounded_credits` is the
/// whole number shown to students.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EctsEstimate {
    pub country_type: CountryType,
    pub credits: f64,
    pub rounded_credits: u32,
    pub method: ConversionMethod,
    pub method_label: &'static str,
    pub confidence: Confidence,
    pub level: DegreeLevel,
    pub within_typical_range: bool,
    pub disclaimer: &'static str,
}

impl EctsEstimate {
    /// Plain-text report suitable for export; always ends with the disclaimer.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Estimated ECTS: {}", self.rounded_credits),
            format!("Credit system: {}", self.country_type.label()),
            format!(
                "Formula: {} ({})",
                self.method_label,
                self.method.label()
            ),
            format!("Level: {}", self.level.description()),
            self.confidence.description().to_string(),
        ];
        if !self.within_typical_range {
            let (min, max) = self.level.typical_range();
            lines.push(format!(
                "Note: outside the typical {min:.0}-{max:.0} ECTS range for this level"
            ));
        }
        lines.push(String::new());
        lines.push(self.disclaimer.to_string());
        lines.join("\n")
    }
}
