use serde::{Deserialize, Serialize};

use super::domain::{AcademicScore, EligibilityForm, EnglishProficiency};
use super::rubric::{band_points, ScoringRubric};

/// Earned/maximum pairs for each dimension plus their totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub academic_score: u8,
    pub academic_max: u8,
    pub english_score: u8,
    pub english_max: u8,
    pub german_score: u8,
    pub german_max: u8,
    pub work_experience_score: u8,
    pub work_experience_max: u8,
    pub total_score: u8,
    pub total_max: u8,
}

/// The four scored dimensions, in recommendation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Academic,
    English,
    German,
    WorkExperience,
}

impl Dimension {
    pub const ORDER: [Dimension; 4] = [
        Dimension::Academic,
        Dimension::English,
        Dimension::German,
        Dimension::WorkExperience,
    ];
}

impl ScoreBreakdown {
    pub fn earned(&self, dimension: Dimension) -> (u8, u8) {
        match dimension {
            Dimension::Academic => (self.academic_score, self.academic_max),
            Dimension::English => (self.english_score, self.english_max),
            Dimension::German => (self.german_score, self.german_max),
            Dimension::WorkExperience => (self.work_experience_score, self.work_experience_max),
        }
    }
}

/// Academic score on a 0-100 basis.
///
/// # Panics
/// When the score lies outside its declared scale; validated forms never do.
pub fn normalized_academic_score(score: AcademicScore, rubric: &ScoringRubric) -> f64 {
    let value = score.value();
    let max = score.score_type().max();
    assert!(
        value.is_finite() && value > 0.0 && value <= max,
        "academic score {value} outside (0, {max}] for {:?}; validate the form before scoring",
        score.score_type()
    );
    match score {
        AcademicScore::Cgpa(cgpa) => cgpa * rubric.cgpa_to_percentage,
        AcademicScore::Percentage(percentage) => percentage,
    }
}

pub(crate) fn academic_points(form: &EligibilityForm, rubric: &ScoringRubric) -> u8 {
    let normalized = normalized_academic_score(form.academic_score, rubric);
    let earned = band_points(rubric.academic_bands, normalized)
        + rubric.qualification_points(form.qualification_level);
    earned.min(rubric.academic_max)
}

pub(crate) fn english_points(english: EnglishProficiency, rubric: &ScoringRubric) -> u8 {
    let earned = match english {
        EnglishProficiency::Ielts(score) => {
            band_points(rubric.ielts_bands, checked_test_score(english, score))
        }
        EnglishProficiency::Toefl(score) => {
            band_points(rubric.toefl_bands, checked_test_score(english, score))
        }
        EnglishProficiency::Pending => rubric.english_pending_points,
        EnglishProficiency::None => rubric.english_none_points,
    };
    earned.min(rubric.english_max)
}

fn checked_test_score(english: EnglishProficiency, score: f64) -> f64 {
    let test = english.test();
    let max = test.max_score().unwrap_or(f64::INFINITY);
    assert!(
        score.is_finite() && score > 0.0 && score <= max,
        "{test:?} score {score} outside (0, {max}]; validate the form before scoring"
    );
    score
}

/// Score every dimension with the same tables the aggregate uses.
pub fn score_breakdown(form: &EligibilityForm, rubric: &ScoringRubric) -> ScoreBreakdown {
    let academic_score = academic_points(form, rubric);
    let english_score = english_points(form.english, rubric);
    let german_score = rubric.german_points(form.german_level).min(rubric.german_max);
    let work_experience_score = rubric
        .work_experience_points(form.work_experience)
        .min(rubric.work_experience_max);

    ScoreBreakdown {
        academic_score,
        academic_max: rubric.academic_max,
        english_score,
        english_max: rubric.english_max,
        german_score,
        german_max: rubric.german_max,
        work_experience_score,
        work_experience_max: rubric.work_experience_max,
        total_score: academic_score + english_score + german_score + work_experience_score,
        total_max: rubric.academic_max
            + rubric.english_max
            + rubric.german_max
            + rubric.work_experience_max,
    }
}
