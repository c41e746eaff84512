use serde::{Deserialize, Serialize};

use super::domain::{
    EligibilityForm, EnglishProficiency, GermanLevel, QualificationLevel, WorkExperience,
};
use super::rubric::ScoringRubric;
use super::scoring::{normalized_academic_score, Dimension, ScoreBreakdown};

/// Three-tier admission outlook derived from the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityLevel {
    PublicEligible,
    PrivateEligible,
    NeedsImprovement,
}

impl EligibilityLevel {
    /// Tier for a readiness score. The rubric's cut-points are the only thresholds used.
    pub fn from_score(score: u8, rubric: &ScoringRubric) -> Self {
        if score >= rubric.public_threshold {
            EligibilityLevel::PublicEligible
        } else if score >= rubric.private_threshold {
            EligibilityLevel::PrivateEligible
        } else {
            EligibilityLevel::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EligibilityLevel::PublicEligible => "public_eligible",
            EligibilityLevel::PrivateEligible => "private_eligible",
            EligibilityLevel::NeedsImprovement => "needs_improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

pub(crate) fn badge(level: EligibilityLevel, needs_studienkolleg: bool) -> Badge {
    match level {
        EligibilityLevel::PublicEligible if needs_studienkolleg => Badge {
            label: "Eligible after Studienkolleg",
            color: "amber",
        },
        EligibilityLevel::PublicEligible => Badge {
            label: "Eligible for Public Universities",
            color: "green",
        },
        EligibilityLevel::PrivateEligible => Badge {
            label: "Additional Steps Required",
            color: "amber",
        },
        EligibilityLevel::NeedsImprovement => Badge {
            label: "Profile Needs Strengthening",
            color: "red",
        },
    }
}

pub(crate) fn message(level: EligibilityLevel, score: u8, needs_studienkolleg: bool) -> String {
    let body = match level {
        EligibilityLevel::PublicEligible if needs_studienkolleg => {
            "Your academic qualifications meet the general requirements for German public \
             universities. You will need to complete Studienkolleg (preparatory course) before \
             direct admission to a degree program."
        }
        EligibilityLevel::PublicEligible => {
            "Based on your academic qualifications and language proficiency, you meet the \
             general eligibility criteria for public universities in Germany."
        }
        EligibilityLevel::PrivateEligible => {
            "Your academic background meets general requirements and private universities are \
             within reach. Stronger language results or Studienkolleg may be needed for \
             public universities."
        }
        EligibilityLevel::NeedsImprovement => {
            "Your profile would benefit from strengthening in certain areas. Our counsellors can \
             help you explore pathways to improve your qualifications and meet university \
             requirements."
        }
    };
    format!("Your readiness score is {score}/100. {body}")
}

/// At most one recommendation per dimension, in [`Dimension::ORDER`], for every sub-score
/// below the rubric's recommendation fraction of its maximum.
pub(crate) fn recommendations(
    form: &EligibilityForm,
    breakdown: &ScoreBreakdown,
    rubric: &ScoringRubric,
) -> Vec<String> {
    Dimension::ORDER
        .iter()
        .filter(|dimension| {
            let (earned, max) = breakdown.earned(**dimension);
            f64::from(earned) < rubric.recommendation_fraction * f64::from(max)
        })
        .map(|dimension| recommendation_for(*dimension, form).to_string())
        .collect()
}

fn recommendation_for(dimension: Dimension, form: &EligibilityForm) -> &'static str {
    match dimension {
        Dimension::Academic if form.qualification_level.needs_studienkolleg() => {
            "Complete Studienkolleg (preparatory course) and keep your grades above 70% to \
             qualify for direct university admission"
        }
        Dimension::Academic => {
            "Strengthen your academic record; most public university programs expect 70% or a \
             CGPA of 7.0 and above"
        }
        Dimension::English => match form.english {
            EnglishProficiency::None => {
                "Take an English proficiency test (IELTS 6.5+ or TOEFL 80+ recommended) for \
                 English-taught programs"
            }
            EnglishProficiency::Pending => {
                "Complete your pending English test and aim for IELTS 6.5+ or TOEFL 90+"
            }
            EnglishProficiency::Ielts(_) => {
                "IELTS 6.5+ overall is recommended for most English-taught public university \
                 programs"
            }
            EnglishProficiency::Toefl(_) => {
                "Improve your TOEFL score to 90+ to compete for English-taught public university \
                 programs"
            }
        },
        Dimension::German if form.german_level == GermanLevel::None => {
            "Start learning German; reaching A2/B1 widens program options and eases daily life"
        }
        Dimension::German => "Reach B2 German or higher to open German-taught programs",
        Dimension::WorkExperience if form.work_experience == WorkExperience::None => {
            "Add internships or project work to show practical experience"
        }
        Dimension::WorkExperience => {
            "Document your work experience and seek roles related to your intended program"
        }
    }
}

pub(crate) fn next_steps(level: EligibilityLevel, needs_studienkolleg: bool) -> Vec<String> {
    let steps: &[&str] = match level {
        EligibilityLevel::NeedsImprovement => &[
            "Book a free consultation to assess your options",
            "Understand the specific gaps in your profile",
            "Create an improvement action plan",
            "Consider alternative pathways to German education",
        ],
        EligibilityLevel::PrivateEligible => &[
            "Complete missing requirements (language tests, etc.)",
            "Book a consultation for personalized guidance",
            "Explore suitable university programs",
            "Prepare required documents",
        ],
        EligibilityLevel::PublicEligible if needs_studienkolleg => &[
            "Research Studienkolleg programs and requirements",
            "Submit APS verification documents",
            "Prepare your application for Studienkolleg",
            "Book a consultation for detailed guidance",
        ],
        EligibilityLevel::PublicEligible => &[
            "Proceed directly to university applications",
            "Complete the APS verification process",
            "Prepare admission documents (SOP, LOR, CV)",
            "Research and shortlist universities",
        ],
    };
    steps.iter().map(|step| step.to_string()).collect()
}

/// Qualitative status lines shown next to the numeric breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDetails {
    pub academic: String,
    pub english: String,
    pub german: String,
    pub needs_studienkolleg: bool,
}

const ACADEMIC_MINIMUM: f64 = 50.0;
const DIPLOMA_ACADEMIC_MINIMUM: f64 = 55.0;
const IELTS_RECOMMENDED: f64 = 6.5;
const TOEFL_RECOMMENDED: f64 = 80.0;

pub(crate) fn assessment(form: &EligibilityForm, rubric: &ScoringRubric) -> AssessmentDetails {
    let needs_studienkolleg = form.qualification_level.needs_studienkolleg();
    let normalized = normalized_academic_score(form.academic_score, rubric);
    let minimum = if form.qualification_level == QualificationLevel::Diploma {
        DIPLOMA_ACADEMIC_MINIMUM
    } else {
        ACADEMIC_MINIMUM
    };

    let academic = match (normalized >= minimum, needs_studienkolleg) {
        (true, true) => "Meets general admission criteria (Studienkolleg required)",
        (true, false) => "Meets general admission criteria",
        (false, _) => "Does not meet minimum academic requirements",
    };

    let english = match form.english {
        EnglishProficiency::None => "No English proficiency test taken",
        EnglishProficiency::Pending => "English proficiency test pending",
        EnglishProficiency::Ielts(score) if score >= IELTS_RECOMMENDED => {
            "Sufficient for English-taught programs"
        }
        EnglishProficiency::Ielts(_) => "Below typical requirement (IELTS 6.5+ recommended)",
        EnglishProficiency::Toefl(score) if score >= TOEFL_RECOMMENDED => {
            "Sufficient for English-taught programs"
        }
        EnglishProficiency::Toefl(_) => "Below typical requirement (TOEFL 80+)",
    };

    let german = if form.german_level == GermanLevel::None {
        "Not required for English-taught programs"
    } else if form.german_level.suits_german_taught_programs() {
        "Sufficient for German-taught programs"
    } else {
        "Only required for German-taught programs (B2+ needed)"
    };

    AssessmentDetails {
        academic: academic.to_string(),
        english: english.to_string(),
        german: german.to_string(),
        needs_studienkolleg,
    }
}
