use crate::eligibility::domain::{
    AcademicScore, EligibilityForm, EligibilityFormDraft, EnglishProficiency, EnglishTest,
    FieldOfStudy, GermanLevel, QualificationLevel, ScoreType, StudyField, WorkExperience,
};

/// Bachelor's engineer, CGPA 8.5, IELTS 7.0, German B1, one to three years of work.
pub(super) fn engineering_graduate() -> EligibilityForm {
    EligibilityForm {
        qualification_level: QualificationLevel::Bachelors,
        field_of_study: StudyField::Engineering,
        academic_score: AcademicScore::Cgpa(8.5),
        english: EnglishProficiency::Ielts(7.0),
        german_level: GermanLevel::B1,
        work_experience: WorkExperience::OneToThree,
    }
}

/// School leaver with 55% and no language results or experience.
pub(super) fn school_leaver() -> EligibilityForm {
    EligibilityForm {
        qualification_level: QualificationLevel::HighSchool,
        field_of_study: StudyField::Other("Hospitality".to_string()),
        academic_score: AcademicScore::Percentage(55.0),
        english: EnglishProficiency::None,
        german_level: GermanLevel::None,
        work_experience: WorkExperience::None,
    }
}

/// Lands between the private and public cut-points (66 points).
pub(super) fn mid_profile() -> EligibilityForm {
    EligibilityForm {
        qualification_level: QualificationLevel::Bachelors,
        field_of_study: StudyField::Business,
        academic_score: AcademicScore::Percentage(70.0),
        english: EnglishProficiency::Ielts(6.5),
        german_level: GermanLevel::A2,
        work_experience: WorkExperience::OneToThree,
    }
}

pub(super) fn complete_draft() -> EligibilityFormDraft {
    EligibilityFormDraft {
        qualification_level: Some(QualificationLevel::Bachelors),
        field_of_study: Some(FieldOfStudy::Engineering),
        other_field_of_study: None,
        score_type: Some(ScoreType::Cgpa),
        score: Some(8.5),
        english_test: Some(EnglishTest::Ielts),
        english_score: Some(7.0),
        german_level: Some(GermanLevel::B1),
        work_experience: Some(WorkExperience::OneToThree),
        preferred_intake: Some("Winter 2026".to_string()),
        country_of_education: Some("IN".to_string()),
    }
}

pub(super) fn english_options() -> Vec<EnglishProficiency> {
    vec![
        EnglishProficiency::None,
        EnglishProficiency::Pending,
        EnglishProficiency::Ielts(5.0),
        EnglishProficiency::Ielts(6.5),
        EnglishProficiency::Toefl(85.0),
        EnglishProficiency::Toefl(110.0),
    ]
}

pub(super) fn academic_options() -> Vec<AcademicScore> {
    vec![
        AcademicScore::Percentage(42.0),
        AcademicScore::Percentage(58.0),
        AcademicScore::Cgpa(7.1),
        AcademicScore::Cgpa(9.6),
    ]
}

/// Every combination of the ordinal inputs over a few score/English samples.
pub(super) fn profile_grid() -> Vec<EligibilityForm> {
    let mut forms = Vec::new();
    for qualification_level in QualificationLevel::ALL {
        for academic_score in academic_options() {
            for english in english_options() {
                for german_level in GermanLevel::ALL {
                    for work_experience in WorkExperience::ALL {
                        forms.push(EligibilityForm {
                            qualification_level,
                            field_of_study: StudyField::It,
                            academic_score,
                            english,
                            german_level,
                            work_experience,
                        });
                    }
                }
            }
        }
    }
    forms
}
