//! Admission-readiness scoring for a validated student profile.
//!
//! [`validate_eligibility_form`] must pass before a draft is converted into an
//! [`EligibilityForm`]; the scorer itself trusts its input and panics on values that
//! validation would have rejected.

pub mod domain;
mod guidance;
pub mod rubric;
mod scoring;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AcademicScore, EligibilityForm, EligibilityFormDraft, EnglishProficiency, EnglishTest,
    FieldOfStudy, GermanLevel, QualificationLevel, ScoreType, StudyField, WorkExperience,
};
pub use guidance::{AssessmentDetails, Badge, EligibilityLevel};
pub use rubric::{RubricError, ScoringRubric, PRIVATE_THRESHOLD, PUBLIC_THRESHOLD};
pub use scoring::{normalized_academic_score, score_breakdown, Dimension, ScoreBreakdown};
pub use validation::{validate_eligibility_form, EligibilityValidationError};

use serde::Serialize;
use tracing::debug;

/// Stateless scorer applying one rubric to student profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityEngine {
    rubric: ScoringRubric,
}

impl EligibilityEngine {
    /// Engine with a custom rubric, rejected unless it satisfies the scoring invariants.
    pub fn new(rubric: ScoringRubric) -> Result<Self, RubricError> {
        rubric.validate()?;
        Ok(Self { rubric })
    }

    pub fn standard() -> Self {
        Self {
            rubric: ScoringRubric::STANDARD,
        }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    pub fn score(&self, form: &EligibilityForm) -> EligibilityResult {
        let breakdown = score_breakdown(form, &self.rubric);
        let readiness_score = breakdown.total_score;
        let level = EligibilityLevel::from_score(readiness_score, &self.rubric);
        let needs_studienkolleg = form.qualification_level.needs_studienkolleg();

        debug!(
            readiness_score,
            level = level.label(),
            academic = breakdown.academic_score,
            english = breakdown.english_score,
            german = breakdown.german_score,
            work_experience = breakdown.work_experience_score,
            "scored eligibility profile"
        );

        EligibilityResult {
            level,
            readiness_score,
            badge: guidance::badge(level, needs_studienkolleg),
            message: guidance::message(level, readiness_score, needs_studienkolleg),
            recommendations: guidance::recommendations(form, &breakdown, &self.rubric),
            next_steps: guidance::next_steps(level, needs_studienkolleg),
            assessment: guidance::assessment(form, &self.rubric),
            breakdown,
        }
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Score a validated profile with the standard rubric.
pub fn calculate_eligibility(form: &EligibilityForm) -> EligibilityResult {
    EligibilityEngine::standard().score(form)
}

/// Scored profile: breakdown, tier, and the guidance text rendered for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityResult {
    pub level: EligibilityLevel,
    pub readiness_score: u8,
    pub breakdown: ScoreBreakdown,
    pub badge: Badge,
    pub message: String,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    pub assessment: AssessmentDetails,
}
