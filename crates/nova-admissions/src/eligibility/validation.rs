use super::domain::{
    AcademicScore, EligibilityForm, EligibilityFormDraft, EnglishProficiency, EnglishTest,
    FieldOfStudy, ScoreType, StudyField,
};

/// Every problem found on a draft form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("eligibility form is incomplete: {}", .0.join("; "))]
pub struct EligibilityValidationError(pub Vec<String>);

impl EligibilityValidationError {
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

/// Collect all violations on a draft form. An empty list means the form can be scored.
pub fn validate_eligibility_form(draft: &EligibilityFormDraft) -> Vec<String> {
    match parse_form(draft) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    }
}

impl TryFrom<&EligibilityFormDraft> for EligibilityForm {
    type Error = EligibilityValidationError;

    fn try_from(draft: &EligibilityFormDraft) -> Result<Self, Self::Error> {
        parse_form(draft).map_err(EligibilityValidationError)
    }
}

impl TryFrom<EligibilityFormDraft> for EligibilityForm {
    type Error = EligibilityValidationError;

    fn try_from(draft: EligibilityFormDraft) -> Result<Self, Self::Error> {
        EligibilityForm::try_from(&draft)
    }
}

fn parse_form(draft: &EligibilityFormDraft) -> Result<EligibilityForm, Vec<String>> {
    let mut errors = Vec::new();

    if draft.qualification_level.is_none() {
        errors.push("Qualification level is required".to_string());
    }

    let field_of_study = parse_field_of_study(draft, &mut errors);
    let academic_score = parse_academic_score(draft, &mut errors);
    let english = parse_english(draft, &mut errors);

    if draft.german_level.is_none() {
        errors.push("German language level is required".to_string());
    }
    if draft.work_experience.is_none() {
        errors.push("Work experience is required".to_string());
    }

    match (
        draft.qualification_level,
        field_of_study,
        academic_score,
        english,
        draft.german_level,
        draft.work_experience,
    ) {
        (
            Some(qualification_level),
            Some(field_of_study),
            Some(academic_score),
            Some(english),
            Some(german_level),
            Some(work_experience),
        ) if errors.is_empty() => Ok(EligibilityForm {
            qualification_level,
            field_of_study,
            academic_score,
            english,
            german_level,
            work_experience,
        }),
        _ => Err(errors),
    }
}

fn parse_field_of_study(
    draft: &EligibilityFormDraft,
    errors: &mut Vec<String>,
) -> Option<StudyField> {
    let Some(field) = draft.field_of_study else {
        errors.push("Field of study is required".to_string());
        return None;
    };

    let parsed = match field {
        FieldOfStudy::Engineering => StudyField::Engineering,
        FieldOfStudy::Business => StudyField::Business,
        FieldOfStudy::It => StudyField::It,
        FieldOfStudy::HealthSciences => StudyField::HealthSciences,
        FieldOfStudy::Arts => StudyField::Arts,
        FieldOfStudy::Other => {
            let text = draft
                .other_field_of_study
                .as_deref()
                .map(str::trim)
                .unwrap_or_default();
            if text.is_empty() {
                errors.push("Please specify your field of study".to_string());
                return None;
            }
            StudyField::Other(text.to_string())
        }
    };
    Some(parsed)
}

fn parse_academic_score(
    draft: &EligibilityFormDraft,
    errors: &mut Vec<String>,
) -> Option<AcademicScore> {
    if draft.score_type.is_none() {
        errors.push("Score type is required".to_string());
    }

    let score = match draft.score {
        Some(score) if score.is_finite() && score > 0.0 => score,
        _ => {
            errors.push("Score is required".to_string());
            return None;
        }
    };

    let score_type = draft.score_type?;
    if score > score_type.max() {
        errors.push(match score_type {
            ScoreType::Cgpa => "CGPA cannot exceed 10".to_string(),
            ScoreType::Percentage => "Percentage cannot exceed 100".to_string(),
        });
        return None;
    }

    Some(match score_type {
        ScoreType::Cgpa => AcademicScore::Cgpa(score),
        ScoreType::Percentage => AcademicScore::Percentage(score),
    })
}

fn parse_english(
    draft: &EligibilityFormDraft,
    errors: &mut Vec<String>,
) -> Option<EnglishProficiency> {
    let Some(test) = draft.english_test else {
        errors.push("English proficiency status is required".to_string());
        return None;
    };

    let score = if test.requires_score() {
        match draft.english_score {
            Some(score) if score.is_finite() && score > 0.0 => score,
            _ => {
                errors.push("English test score is required".to_string());
                return None;
            }
        }
    } else {
        0.0
    };

    match test {
        EnglishTest::Ielts if score > 9.0 => {
            errors.push("IELTS score cannot exceed 9".to_string());
            None
        }
        EnglishTest::Toefl if score > 120.0 => {
            errors.push("TOEFL score cannot exceed 120".to_string());
            None
        }
        EnglishTest::Ielts => Some(EnglishProficiency::Ielts(score)),
        EnglishTest::Toefl => Some(EnglishProficiency::Toefl(score)),
        EnglishTest::Pending => Some(EnglishProficiency::Pending),
        EnglishTest::None => Some(EnglishProficiency::None),
    }
}
