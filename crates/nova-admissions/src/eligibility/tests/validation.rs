use super::common::*;
use crate::eligibility::domain::{
    AcademicScore, EligibilityForm, EligibilityFormDraft, EnglishProficiency, EnglishTest,
    FieldOfStudy, GermanLevel, ScoreType, StudyField, WorkExperience,
};
use crate::eligibility::{calculate_eligibility, validate_eligibility_form};

#[test]
fn complete_draft_converts_into_a_scoreable_form() {
    let draft = complete_draft();
    assert!(validate_eligibility_form(&draft).is_empty());

    let form = EligibilityForm::try_from(&draft).expect("draft is complete");
    assert_eq!(form, engineering_graduate());
    assert_eq!(calculate_eligibility(&form).readiness_score, 84);
}

#[test]
fn empty_draft_reports_every_missing_field_in_order() {
    let errors = validate_eligibility_form(&EligibilityFormDraft::default());

    assert_eq!(
        errors,
        vec![
            "Qualification level is required",
            "Field of study is required",
            "Score type is required",
            "Score is required",
            "English proficiency status is required",
            "German language level is required",
            "Work experience is required",
        ]
    );
}

#[test]
fn other_field_requires_free_text() {
    let mut draft = complete_draft();
    draft.field_of_study = Some(FieldOfStudy::Other);
    draft.other_field_of_study = Some("   ".to_string());
    assert_eq!(
        validate_eligibility_form(&draft),
        vec!["Please specify your field of study"]
    );

    draft.other_field_of_study = Some(" Architecture ".to_string());
    let form = EligibilityForm::try_from(draft).expect("field is specified");
    assert_eq!(
        form.field_of_study,
        StudyField::Other("Architecture".to_string())
    );
}

#[test]
fn academic_scores_are_bounded_by_their_scale() {
    let mut draft = complete_draft();
    draft.score = Some(10.5);
    assert_eq!(validate_eligibility_form(&draft), vec!["CGPA cannot exceed 10"]);

    draft.score_type = Some(ScoreType::Percentage);
    draft.score = Some(101.0);
    assert_eq!(
        validate_eligibility_form(&draft),
        vec!["Percentage cannot exceed 100"]
    );

    draft.score = Some(100.0);
    let form = EligibilityForm::try_from(&draft).expect("100% is allowed");
    assert_eq!(form.academic_score, AcademicScore::Percentage(100.0));
}

#[test]
fn zero_score_counts_as_missing() {
    let mut draft = complete_draft();
    draft.score = Some(0.0);
    assert_eq!(validate_eligibility_form(&draft), vec!["Score is required"]);
}

#[test]
fn test_scores_are_required_only_for_taken_tests() {
    let mut draft = complete_draft();
    draft.english_score = None;
    assert_eq!(
        validate_eligibility_form(&draft),
        vec!["English test score is required"]
    );

    draft.english_test = Some(EnglishTest::Pending);
    let form = EligibilityForm::try_from(&draft).expect("pending needs no score");
    assert_eq!(form.english, EnglishProficiency::Pending);

    draft.english_test = Some(EnglishTest::None);
    draft.english_score = Some(7.5);
    let form = EligibilityForm::try_from(&draft).expect("stray score is ignored");
    assert_eq!(form.english, EnglishProficiency::None);
}

#[test]
fn test_scores_are_bounded_by_their_scale() {
    let mut draft = complete_draft();
    draft.english_score = Some(9.5);
    assert_eq!(
        validate_eligibility_form(&draft),
        vec!["IELTS score cannot exceed 9"]
    );

    draft.english_test = Some(EnglishTest::Toefl);
    draft.english_score = Some(121.0);
    assert_eq!(
        validate_eligibility_form(&draft),
        vec!["TOEFL score cannot exceed 120"]
    );
}

#[test]
fn violations_accumulate_instead_of_stopping_at_the_first() {
    let mut draft = complete_draft();
    draft.score = Some(12.0);
    draft.english_score = None;
    draft.german_level = None;

    let error = EligibilityForm::try_from(&draft).expect_err("three fields are invalid");
    assert_eq!(
        error.messages(),
        [
            "CGPA cannot exceed 10",
            "English test score is required",
            "German language level is required",
        ]
    );
    assert!(error.to_string().contains("CGPA cannot exceed 10"));
}

#[test]
fn drafts_deserialize_from_wire_names() {
    let draft: EligibilityFormDraft = serde_json::from_str(
        r#"{
            "qualification_level": "HIGH_SCHOOL",
            "field_of_study": "HEALTH_SCIENCES",
            "score_type": "PERCENTAGE",
            "score": 55,
            "english_test": "NONE",
            "german_level": "NONE",
            "work_experience": "LESS_THAN_1",
            "preferred_intake": "Summer 2027"
        }"#,
    )
    .expect("draft parses");

    let form = EligibilityForm::try_from(draft).expect("draft is complete");
    assert_eq!(form.field_of_study, StudyField::HealthSciences);
    assert_eq!(form.german_level, GermanLevel::None);
    assert_eq!(form.work_experience, WorkExperience::LessThan1);
}

#[test]
fn unknown_enumeration_values_are_rejected_at_parse_time() {
    let parsed = serde_json::from_str::<EligibilityFormDraft>(r#"{"qualification_level": "MBA"}"#);
    assert!(parsed.is_err());
}
