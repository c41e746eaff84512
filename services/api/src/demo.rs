use crate::infra::{degree_details, read_eligibility_draft, DegreeInput, DegreeLevelArg};
use clap::Args;
use nova_admissions::credits::{
    classify_country, estimate_credits, find_country, CountryType, DegreeDetails, EctsEstimate,
    NorthAmericanDegreeLevel, SouthAsianDegreeLevel,
};
use nova_admissions::eligibility::{
    calculate_eligibility, AcademicScore, EligibilityForm, EligibilityResult, EnglishProficiency,
    GermanLevel, QualificationLevel, StudyField, WorkExperience,
};
use nova_admissions::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// ISO country code of the awarding institution (e.g. DE, IN, US)
    #[arg(long)]
    pub(crate) country: String,
    /// ECTS credit points (EU/EEA countries)
    #[arg(long)]
    pub(crate) credit_points: Option<f64>,
    /// Local credits (US/Canada semester credits or UK CATS credits)
    #[arg(long)]
    pub(crate) credits: Option<f64>,
    /// Degree duration in years (South Asia and other countries)
    #[arg(long)]
    pub(crate) years: Option<f64>,
    /// Degree level; defaults to bachelor
    #[arg(long, value_enum)]
    pub(crate) degree_level: Option<DegreeLevelArg>,
    /// Print the estimate as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// JSON file holding the eligibility form fields
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the full result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the ECTS portion of the demo
    #[arg(long)]
    pub(crate) skip_credits: bool,
    /// Skip the eligibility portion of the demo
    #[arg(long)]
    pub(crate) skip_eligibility: bool,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let country_type = classify_country(&args.country);
    let details = degree_details(
        country_type,
        DegreeInput {
            credit_points: args.credit_points,
            credits: args.credits,
            years: args.years,
            degree_level: args.degree_level,
        },
    )?;

    let estimate = estimate_credits(country_type, &details)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        let name = find_country(&args.country)
            .map(|country| country.name)
            .unwrap_or("Other country");
        render_estimate(name, &estimate);
    }
    Ok(())
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let draft = read_eligibility_draft(&args.input)?;
    let form = EligibilityForm::try_from(draft)?;
    let result = calculate_eligibility(&form);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_eligibility(&result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Nova admissions demo");

    if !args.skip_credits {
        println!("\nECTS estimates");
        for (name, country_type, details) in sample_degrees() {
            match estimate_credits(country_type, &details) {
                Ok(estimate) => render_estimate(name, &estimate),
                Err(err) => println!("  {name}: estimate unavailable ({err})"),
            }
        }
    }

    if !args.skip_eligibility {
        println!("\nEligibility checks");
        for (label, form) in sample_profiles() {
            println!("\n{label}");
            render_eligibility(&calculate_eligibility(&form));
        }
    }

    Ok(())
}

fn render_estimate(country: &str, estimate: &EctsEstimate) {
    println!("{}", estimate_text(country, estimate));
}

fn estimate_text(country: &str, estimate: &EctsEstimate) -> String {
    let mut lines = vec![
        format!(
            "- {country}: {} ECTS ({:?} level, {:?} confidence)",
            estimate.rounded_credits, estimate.level, estimate.confidence
        ),
        format!("  Method: {}", estimate.method_label),
    ];
    if !estimate.within_typical_range {
        lines.push(format!(
            "  Note: outside the typical range for a {}",
            estimate.level.description()
        ));
    }
    lines.push(format!("  {}", estimate.disclaimer));
    lines.join("\n")
}

fn render_eligibility(result: &EligibilityResult) {
    let breakdown = &result.breakdown;
    println!(
        "- {} ({}): {}/{}",
        result.badge.label, result.badge.color, result.readiness_score, breakdown.total_max
    );
    println!(
        "  Academic {}/{} | English {}/{} | German {}/{} | Work experience {}/{}",
        breakdown.academic_score,
        breakdown.academic_max,
        breakdown.english_score,
        breakdown.english_max,
        breakdown.german_score,
        breakdown.german_max,
        breakdown.work_experience_score,
        breakdown.work_experience_max
    );
    println!("  {}", result.message);
    if !result.recommendations.is_empty() {
        println!("  Recommendations:");
        for recommendation in &result.recommendations {
            println!("    - {recommendation}");
        }
    }
    println!("  Next steps:");
    for step in &result.next_steps {
        println!("    - {step}");
    }
}

fn sample_degrees() -> Vec<(&'static str, CountryType, DegreeDetails)> {
    vec![
        (
            "Germany",
            CountryType::EuEcts,
            DegreeDetails::EuEcts {
                credit_points: 180.0,
            },
        ),
        (
            "India",
            CountryType::IndiaSubcontinent,
            DegreeDetails::IndiaSubcontinent {
                degree_level: Some(SouthAsianDegreeLevel::Bachelor),
                years: 3,
            },
        ),
        (
            "United States",
            CountryType::UsaCanada,
            DegreeDetails::UsaCanada {
                credits: 120.0,
                degree_level: Some(NorthAmericanDegreeLevel::Bachelor),
            },
        ),
    ]
}

fn sample_profiles() -> Vec<(&'static str, EligibilityForm)> {
    vec![
        (
            "Engineering graduate with IELTS 7.0 and German B1",
            EligibilityForm {
                qualification_level: QualificationLevel::Bachelors,
                field_of_study: StudyField::Engineering,
                academic_score: AcademicScore::Cgpa(8.5),
                english: EnglishProficiency::Ielts(7.0),
                german_level: GermanLevel::B1,
                work_experience: WorkExperience::OneToThree,
            },
        ),
        (
            "School leaver without language results",
            EligibilityForm {
                qualification_level: QualificationLevel::HighSchool,
                field_of_study: StudyField::Other("Hospitality".to_string()),
                academic_score: AcademicScore::Percentage(55.0),
                english: EnglishProficiency::None,
                german_level: GermanLevel::None,
                work_experience: WorkExperience::None,
            },
        ),
    ]
}
