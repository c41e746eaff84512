use serde::{Deserialize, Serialize};

/// Highest completed qualification, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualificationLevel {
    HighSchool,
    Diploma,
    Bachelors,
    Masters,
    Phd,
}

impl QualificationLevel {
    pub const ALL: [QualificationLevel; 5] = [
        QualificationLevel::HighSchool,
        QualificationLevel::Diploma,
        QualificationLevel::Bachelors,
        QualificationLevel::Masters,
        QualificationLevel::Phd,
    ];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// School leavers need a preparatory year before direct degree admission.
    pub const fn needs_studienkolleg(self) -> bool {
        matches!(self, QualificationLevel::HighSchool)
    }
}

/// Field of study as selected on the form; `Other` is paired with free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldOfStudy {
    Engineering,
    Business,
    It,
    HealthSciences,
    Arts,
    Other,
}

/// Validated field of study with the free-text value folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyField {
    Engineering,
    Business,
    It,
    HealthSciences,
    Arts,
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreType {
    Cgpa,
    Percentage,
}

impl ScoreType {
    pub const fn max(self) -> f64 {
        match self {
            ScoreType::Cgpa => 10.0,
            ScoreType::Percentage => 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnglishTest {
    Ielts,
    Toefl,
    Pending,
    None,
}

impl EnglishTest {
    pub const fn requires_score(self) -> bool {
        matches!(self, EnglishTest::Ielts | EnglishTest::Toefl)
    }

    /// Highest reportable score for scored tests.
    pub const fn max_score(self) -> Option<f64> {
        match self {
            EnglishTest::Ielts => Some(9.0),
            EnglishTest::Toefl => Some(120.0),
            EnglishTest::Pending | EnglishTest::None => None,
        }
    }
}

/// CEFR German level, ordered from none to mastery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GermanLevel {
    #[serde(rename = "NONE")]
    None,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl GermanLevel {
    pub const ALL: [GermanLevel; 7] = [
        GermanLevel::None,
        GermanLevel::A1,
        GermanLevel::A2,
        GermanLevel::B1,
        GermanLevel::B2,
        GermanLevel::C1,
        GermanLevel::C2,
    ];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// B2 and above is the usual entry level for German-taught programs.
    pub const fn suits_german_taught_programs(self) -> bool {
        matches!(self, GermanLevel::B2 | GermanLevel::C1 | GermanLevel::C2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkExperience {
    None,
    #[serde(rename = "LESS_THAN_1")]
    LessThan1,
    OneToThree,
    ThreePlus,
}

impl WorkExperience {
    pub const ALL: [WorkExperience; 4] = [
        WorkExperience::None,
        WorkExperience::LessThan1,
        WorkExperience::OneToThree,
        WorkExperience::ThreePlus,
    ];

    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Academic result on exactly one scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "score_type", content = "score", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcademicScore {
    Cgpa(f64),
    Percentage(f64),
}

impl AcademicScore {
    pub const fn score_type(&self) -> ScoreType {
        match self {
            AcademicScore::Cgpa(_) => ScoreType::Cgpa,
            AcademicScore::Percentage(_) => ScoreType::Percentage,
        }
    }

    pub const fn value(&self) -> f64 {
        match self {
            AcademicScore::Cgpa(value) | AcademicScore::Percentage(value) => *value,
        }
    }
}

/// English proficiency with the score carried only by scored tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "english_test", content = "english_score", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnglishProficiency {
    Ielts(f64),
    Toefl(f64),
    Pending,
    None,
}

impl EnglishProficiency {
    pub const fn test(&self) -> EnglishTest {
        match self {
            EnglishProficiency::Ielts(_) => EnglishTest::Ielts,
            EnglishProficiency::Toefl(_) => EnglishTest::Toefl,
            EnglishProficiency::Pending => EnglishTest::Pending,
            EnglishProficiency::None => EnglishTest::None,
        }
    }
}

/// Form state as submitted; any field may be missing until validation passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityFormDraft {
    pub qualification_level: Option<QualificationLevel>,
    pub field_of_study: Option<FieldOfStudy>,
    pub other_field_of_study: Option<String>,
    pub score_type: Option<ScoreType>,
    pub score: Option<f64>,
    pub english_test: Option<EnglishTest>,
    pub english_score: Option<f64>,
    pub german_level: Option<GermanLevel>,
    pub work_experience: Option<WorkExperience>,
    pub preferred_intake: Option<String>,
    pub country_of_education: Option<String>,
}

/// Validated student profile consumed by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityForm {
    pub qualification_level: QualificationLevel,
    pub field_of_study: StudyField,
    pub academic_score: AcademicScore,
    pub english: EnglishProficiency,
    pub german_level: GermanLevel,
    pub work_experience: WorkExperience,
}
