use super::common::*;
use crate::eligibility::domain::{
    AcademicScore, EnglishProficiency, GermanLevel, QualificationLevel, WorkExperience,
};
use crate::eligibility::rubric::ScoringRubric;
use crate::eligibility::{
    calculate_eligibility, normalized_academic_score, EligibilityEngine, EligibilityLevel,
    RubricError,
};

#[test]
fn strong_graduate_is_public_eligible() {
    let result = calculate_eligibility(&engineering_graduate());

    assert_eq!(result.breakdown.academic_score, 38);
    assert_eq!(result.breakdown.english_score, 25);
    assert_eq!(result.breakdown.german_score, 11);
    assert_eq!(result.breakdown.work_experience_score, 10);
    assert_eq!(result.readiness_score, 84);
    assert_eq!(result.level, EligibilityLevel::PublicEligible);
}

#[test]
fn weak_school_leaver_needs_improvement() {
    let result = calculate_eligibility(&school_leaver());

    assert_eq!(result.readiness_score, 16);
    assert_eq!(result.level, EligibilityLevel::NeedsImprovement);
    assert_eq!(result.recommendations.len(), 4);
}

#[test]
fn mid_profile_is_private_eligible() {
    let result = calculate_eligibility(&mid_profile());

    assert_eq!(result.readiness_score, 66);
    assert_eq!(result.level, EligibilityLevel::PrivateEligible);
}

#[test]
fn breakdown_always_sums_to_readiness_score() {
    for form in profile_grid() {
        let result = calculate_eligibility(&form);
        let b = result.breakdown;
        assert_eq!(
            b.academic_max + b.english_max + b.german_max + b.work_experience_max,
            100
        );
        assert_eq!(
            b.academic_score + b.english_score + b.german_score + b.work_experience_score,
            result.readiness_score
        );
        assert_eq!(b.total_score, result.readiness_score);
        assert!(b.academic_score <= b.academic_max);
        assert!(b.english_score <= b.english_max);
        assert!(b.german_score <= b.german_max);
        assert!(b.work_experience_score <= b.work_experience_max);
    }
}

#[test]
fn tier_matches_thresholds_for_every_profile() {
    let rubric = ScoringRubric::STANDARD;
    for form in profile_grid() {
        let result = calculate_eligibility(&form);
        let score = result.readiness_score;
        assert_eq!(
            score >= rubric.public_threshold,
            result.level == EligibilityLevel::PublicEligible
        );
        assert_eq!(
            score >= rubric.private_threshold && score < rubric.public_threshold,
            result.level == EligibilityLevel::PrivateEligible
        );
    }
}

#[test]
fn tiers_partition_the_whole_range() {
    let rubric = ScoringRubric::STANDARD;
    assert_eq!(
        EligibilityLevel::from_score(100, &rubric),
        EligibilityLevel::PublicEligible
    );
    assert_eq!(
        EligibilityLevel::from_score(80, &rubric),
        EligibilityLevel::PublicEligible
    );
    assert_eq!(
        EligibilityLevel::from_score(79, &rubric),
        EligibilityLevel::PrivateEligible
    );
    assert_eq!(
        EligibilityLevel::from_score(60, &rubric),
        EligibilityLevel::PrivateEligible
    );
    assert_eq!(
        EligibilityLevel::from_score(59, &rubric),
        EligibilityLevel::NeedsImprovement
    );
    assert_eq!(
        EligibilityLevel::from_score(0, &rubric),
        EligibilityLevel::NeedsImprovement
    );
}

#[test]
fn higher_academic_scores_never_lower_the_result() {
    for qualification_level in QualificationLevel::ALL {
        let mut previous = (0, 0);
        for step in 1..=100 {
            let mut form = engineering_graduate();
            form.qualification_level = qualification_level;
            form.academic_score = AcademicScore::Percentage(f64::from(step));
            let result = calculate_eligibility(&form);
            let current = (result.breakdown.academic_score, result.readiness_score);
            assert!(current.0 >= previous.0 && current.1 >= previous.1);
            previous = current;
        }
    }
}

#[test]
fn higher_qualifications_never_lower_the_academic_score() {
    let mut previous = 0;
    for qualification_level in QualificationLevel::ALL {
        let mut form = engineering_graduate();
        form.qualification_level = qualification_level;
        let academic = calculate_eligibility(&form).breakdown.academic_score;
        assert!(academic >= previous);
        previous = academic;
    }
}

#[test]
fn higher_english_scores_never_lower_the_result() {
    let mut previous = 0;
    for tenth in 1..=90 {
        let mut form = mid_profile();
        form.english = EnglishProficiency::Ielts(f64::from(tenth) / 10.0);
        let english = calculate_eligibility(&form).breakdown.english_score;
        assert!(english >= previous);
        previous = english;
    }
    assert_eq!(previous, 25);

    previous = 0;
    for toefl in 1..=120 {
        let mut form = mid_profile();
        form.english = EnglishProficiency::Toefl(f64::from(toefl));
        let english = calculate_eligibility(&form).breakdown.english_score;
        assert!(english >= previous);
        previous = english;
    }
    assert_eq!(previous, 25);
}

#[test]
fn pending_english_earns_partial_credit() {
    let mut form = mid_profile();
    form.english = EnglishProficiency::Pending;
    let pending = calculate_eligibility(&form).breakdown.english_score;
    form.english = EnglishProficiency::None;
    let none = calculate_eligibility(&form).breakdown.english_score;

    assert_eq!(none, 0);
    assert!(pending > none && pending < 25);
}

#[test]
fn each_german_level_scores_strictly_higher() {
    let scores: Vec<u8> = GermanLevel::ALL
        .iter()
        .map(|level| {
            let mut form = mid_profile();
            form.german_level = *level;
            calculate_eligibility(&form).breakdown.german_score
        })
        .collect();

    assert_eq!(scores.first(), Some(&0));
    assert_eq!(scores.last(), Some(&20));
    assert!(scores.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn work_experience_buckets_are_monotonic() {
    let scores: Vec<u8> = WorkExperience::ALL
        .iter()
        .map(|experience| {
            let mut form = mid_profile();
            form.work_experience = *experience;
            calculate_eligibility(&form).breakdown.work_experience_score
        })
        .collect();

    assert_eq!(scores, vec![0, 5, 10, 15]);
}

#[test]
fn cgpa_and_percentage_share_a_basis() {
    let rubric = ScoringRubric::STANDARD;
    assert_eq!(
        normalized_academic_score(AcademicScore::Cgpa(8.5), &rubric),
        normalized_academic_score(AcademicScore::Percentage(85.0), &rubric)
    );

    let mut cgpa = engineering_graduate();
    cgpa.academic_score = AcademicScore::Cgpa(7.2);
    let mut percentage = engineering_graduate();
    percentage.academic_score = AcademicScore::Percentage(72.0);
    assert_eq!(
        calculate_eligibility(&cgpa).breakdown.academic_score,
        calculate_eligibility(&percentage).breakdown.academic_score
    );
}

#[test]
fn scoring_is_idempotent() {
    let form = engineering_graduate();
    assert_eq!(calculate_eligibility(&form), calculate_eligibility(&form));
}

#[test]
#[should_panic(expected = "validate the form before scoring")]
fn out_of_range_cgpa_fails_loudly() {
    let mut form = engineering_graduate();
    form.academic_score = AcademicScore::Cgpa(14.0);
    calculate_eligibility(&form);
}

#[test]
#[should_panic(expected = "validate the form before scoring")]
fn out_of_range_toefl_fails_loudly() {
    let mut form = engineering_graduate();
    form.english = EnglishProficiency::Toefl(150.0);
    calculate_eligibility(&form);
}

#[test]
fn engine_rejects_inconsistent_rubrics() {
    let rubric = ScoringRubric {
        german_points: [0, 4, 7, 11, 15, 18, 25],
        ..ScoringRubric::STANDARD
    };
    assert!(matches!(
        EligibilityEngine::new(rubric),
        Err(RubricError::MaximumMismatch { table: "german", .. })
    ));
}

#[test]
fn engine_accepts_retuned_thresholds() {
    let rubric = ScoringRubric {
        public_threshold: 85,
        private_threshold: 65,
        ..ScoringRubric::STANDARD
    };
    let engine = EligibilityEngine::new(rubric).expect("rubric is consistent");
    let result = engine.score(&engineering_graduate());

    assert_eq!(result.readiness_score, 84);
    assert_eq!(result.level, EligibilityLevel::PrivateEligible);
}
